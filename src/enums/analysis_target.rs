use crate::i18n::{Locale, Message};

/// Wizard categories: what the user wants to analyze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisTarget {
    Screens,
    Components,
    Services,
    Utils,
    CustomFile,
    MultipleFiles,
}

impl AnalysisTarget {
    pub const ALL: [AnalysisTarget; 6] = [
        AnalysisTarget::Screens,
        AnalysisTarget::Components,
        AnalysisTarget::Services,
        AnalysisTarget::Utils,
        AnalysisTarget::CustomFile,
        AnalysisTarget::MultipleFiles,
    ];

    pub fn label(&self, locale: Locale) -> String {
        let message = match self {
            AnalysisTarget::Screens => Message::TargetScreen,
            AnalysisTarget::Components => Message::TargetComponent,
            AnalysisTarget::Services => Message::TargetService,
            AnalysisTarget::Utils => Message::TargetUtil,
            AnalysisTarget::CustomFile => Message::TargetCustom,
            AnalysisTarget::MultipleFiles => Message::TargetMultiple,
        };
        locale.text(message)
    }
}
