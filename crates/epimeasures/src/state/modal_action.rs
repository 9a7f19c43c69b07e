use super::TabId;

/// What a confirmed text-input modal applies its value to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Replace the text of a calculator field
    EditField { tab: TabId, index: usize },
    /// Append an age at death to the YPLL list
    AddAge,
    /// Type a follow-up time for a participant
    EditFollowUp { id: u32 },
}
