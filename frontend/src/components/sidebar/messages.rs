use crate::tabs::Section;

pub enum Msg {
    /// A tool reported a credit change; re-fetch the balance.
    RefreshCredits,
    CreditsLoaded(Option<u64>),
    ToggleSection(Section),
    SignOut,
}
