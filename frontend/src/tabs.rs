//! The shell's active-tool selector. One tab is mounted at a time; the
//! sidebar groups them into sections.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    ArticleGenerator,
    Humanizer,
    Plagiarism,
    Seo,
    Grammar,
    Paraphrase,
    FileConverter,
    PdfToText,
    TextToPdf,
    ImageGenerator,
    BackgroundRemover,
    ImageConverter,
    CaptionGenerator,
    Pricing,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::ArticleGenerator => "Article Generator",
            Tab::Humanizer => "AI Humanizer",
            Tab::Plagiarism => "Plagiarism Checker",
            Tab::Seo => "SEO Optimizer",
            Tab::Grammar => "Grammar Checker",
            Tab::Paraphrase => "Paraphraser",
            Tab::FileConverter => "Universal Converter",
            Tab::PdfToText => "PDF to Text",
            Tab::TextToPdf => "Text to PDF",
            Tab::ImageGenerator => "AI Image Generator",
            Tab::BackgroundRemover => "Background Remover",
            Tab::ImageConverter => "Image Converter",
            Tab::CaptionGenerator => "Caption Generator",
            Tab::Pricing => "Credits & Plans",
        }
    }

    /// Small marketing badge shown next to some nav entries.
    pub fn badge(self) -> Option<&'static str> {
        match self {
            Tab::FileConverter => Some("Pro"),
            Tab::PdfToText | Tab::TextToPdf | Tab::BackgroundRemover => Some("New"),
            Tab::ImageGenerator => Some("Hot"),
            _ => None,
        }
    }
}

/// Collapsible sidebar sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Writers,
    Editors,
    Creators,
}

impl Section {
    pub fn label(self) -> &'static str {
        match self {
            Section::Writers => "For Writers",
            Section::Editors => "For Editors",
            Section::Creators => "For Creators",
        }
    }

    pub fn tabs(self) -> &'static [Tab] {
        match self {
            Section::Writers => &[
                Tab::ArticleGenerator,
                Tab::Humanizer,
                Tab::Plagiarism,
                Tab::Seo,
                Tab::Grammar,
                Tab::Paraphrase,
            ],
            Section::Editors => &[Tab::FileConverter, Tab::PdfToText, Tab::TextToPdf],
            Section::Creators => &[
                Tab::ImageGenerator,
                Tab::BackgroundRemover,
                Tab::ImageConverter,
                Tab::CaptionGenerator,
            ],
        }
    }

    pub const ALL: [Section; 3] = [Section::Writers, Section::Editors, Section::Creators];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tool_tab_belongs_to_exactly_one_section() {
        let grouped: Vec<Tab> = Section::ALL.iter().flat_map(|s| s.tabs()).copied().collect();
        let mut seen = grouped.clone();
        seen.dedup();
        assert_eq!(grouped.len(), seen.len());
        assert!(!grouped.contains(&Tab::Dashboard));
        assert!(!grouped.contains(&Tab::Pricing));
        assert_eq!(grouped.len(), 13);
    }
}
