use crate::components::{Component, EventResult};
use crate::content::QUESTIONS;
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::{AppState, QuizState};
use crate::util::styles::{
    FOCUS_COLOR, HELP_COLOR, NEGATIVE_COLOR, POSITIVE_COLOR, focused_block,
    focused_block_with_help, header_style,
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::Screen;

const OPTION_LETTERS: [char; 6] = ['a', 'b', 'c', 'd', 'e', 'f'];

#[derive(Default)]
pub struct QuizScreen;

impl QuizScreen {
    pub fn new() -> Self {
        Self
    }

    fn question_lines(quiz: &QuizState) -> Vec<Line<'static>> {
        let question = quiz.question();
        let selected = quiz.selected();

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("Question {} of {}", quiz.current + 1, QUESTIONS.len()),
                    header_style(),
                ),
                Span::styled(
                    format!("   Topic: {}", question.topic.name()),
                    Style::default().fg(HELP_COLOR),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                question.prompt,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        lines.extend(question.options.iter().enumerate().map(|(idx, option)| {
            let is_cursor = idx == quiz.cursor;
            let chosen = selected == Some(idx);
            let radio = if chosen { "(•)" } else { "( )" };
            let letter = OPTION_LETTERS.get(idx).copied().unwrap_or('?');

            let mut style = if chosen {
                let color = if question.is_correct(idx) {
                    POSITIVE_COLOR
                } else {
                    NEGATIVE_COLOR
                };
                Style::default().fg(color)
            } else {
                Style::default()
            };
            if is_cursor {
                style = style.add_modifier(Modifier::BOLD);
            }

            Line::from(vec![
                Span::styled(if is_cursor { "> " } else { "  " }, Style::default().fg(FOCUS_COLOR)),
                Span::styled(format!("{radio} {letter}. {option}"), style),
            ])
        }));
        lines
    }

    fn feedback_lines(quiz: &QuizState) -> Vec<Line<'static>> {
        let question = quiz.question();
        let Some(option) = quiz.selected() else {
            return vec![Line::from(Span::styled(
                "Choose an option and press Enter to check your answer.",
                Style::default().fg(HELP_COLOR),
            ))];
        };

        let color = if question.is_correct(option) {
            POSITIVE_COLOR
        } else {
            NEGATIVE_COLOR
        };
        let mut lines = vec![Line::from(Span::styled(
            question.feedback(option),
            Style::default().fg(color),
        ))];
        if quiz.show_explanation() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Explanation", header_style())));
            lines.push(Line::from(question.explanation));
        }
        lines
    }

    fn score_line(quiz: &QuizState) -> Line<'static> {
        let (correct, answered) = quiz.score();
        Line::from(vec![
            Span::raw(format!(" Score: {correct}/{answered} answered correctly")),
            Span::styled(
                format!("   ({} of {} questions left)", QUESTIONS.len() - answered, QUESTIONS.len()),
                Style::default().fg(HELP_COLOR),
            ),
        ])
    }
}

impl Component for QuizScreen {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        let nav = &state.keybindings.navigation;
        let quiz_keys = &state.keybindings.quiz;
        let quiz = &mut state.quiz_state;

        if KeybindingsConfig::matches(&key, &nav.down) {
            quiz.move_cursor(true);
        } else if KeybindingsConfig::matches(&key, &nav.up) {
            quiz.move_cursor(false);
        } else if KeybindingsConfig::matches(&key, &quiz_keys.answer) {
            quiz.answer();
        } else if KeybindingsConfig::matches(&key, &quiz_keys.next_question) {
            quiz.next();
        } else if KeybindingsConfig::matches(&key, &quiz_keys.prev_question) {
            quiz.prev();
        } else if KeybindingsConfig::matches(&key, &quiz_keys.reset) {
            quiz.reset();
        } else {
            return EventResult::NotHandled;
        }
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let quiz = &state.quiz_state;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),   // Question
                Constraint::Length(9), // Feedback
                Constraint::Length(1), // Score
            ])
            .split(area);

        let question = Paragraph::new(Self::question_lines(quiz))
            .block(focused_block_with_help(
                " Practice MCQs ",
                true,
                "[j/k] Option [Enter] Answer [n/p] Question [r] Reset",
            ))
            .wrap(Wrap { trim: false });
        frame.render_widget(question, chunks[0]);

        let feedback = Paragraph::new(Self::feedback_lines(quiz))
            .block(focused_block(" Feedback ", false))
            .wrap(Wrap { trim: false });
        frame.render_widget(feedback, chunks[1]);

        frame.render_widget(Paragraph::new(Self::score_line(quiz)), chunks[2]);
    }
}

impl Screen for QuizScreen {
    fn title(&self) -> &str {
        "Quiz"
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use crate::event::KeyCode;

    fn press(state: &mut AppState, code: KeyCode) {
        QuizScreen::new().handle_key(AppKeyEvent::new(code), state);
    }

    #[test]
    fn wrong_answer_shows_feedback_without_explanation() {
        let mut state = AppState::default();
        let correct = state.quiz_state.question().correct;
        let wrong = (correct + 1) % state.quiz_state.question().options.len();
        while state.quiz_state.cursor != wrong {
            press(&mut state, KeyCode::Down);
        }
        press(&mut state, KeyCode::Enter);

        let lines = QuizScreen::feedback_lines(&state.quiz_state);
        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines[0].spans[0].content,
            state.quiz_state.question().incorrect_feedback
        );
    }

    #[test]
    fn correct_answer_reveals_explanation() {
        let mut state = AppState::default();
        let correct = state.quiz_state.question().correct;
        while state.quiz_state.cursor != correct {
            press(&mut state, KeyCode::Down);
        }
        press(&mut state, KeyCode::Char(' '));

        let lines = QuizScreen::feedback_lines(&state.quiz_state);
        assert_eq!(lines.len(), 4);
        assert_eq!(state.quiz_state.score(), (1, 1));

        press(&mut state, KeyCode::Char('n'));
        assert_eq!(state.quiz_state.current, 1);
        press(&mut state, KeyCode::Char('r'));
        assert_eq!(state.quiz_state.score(), (0, 0));
        assert_eq!(state.quiz_state.current, 0);
    }
}
