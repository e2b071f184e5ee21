//! Section template catalog - The fixed set of recognized section titles
//! and their pre-authored seed content.
//!
//! The catalog is a closed tagged union rather than a string-keyed map, so
//! an unrecognized title is a visible `Custom` case instead of a silent
//! empty-string fallback.

const FEATURES_SEED: &str = r#"## Features

- Easy to use
- Customizable
- Cross-platform compatibility
- Regular updates"#;

const INSTALLATION_SEED: &str = r#"## Installation

```bash
npm install my-project
cd my-project
npm start
```"#;

const CONTRIBUTING_SEED: &str = r#"## Contributing

Contributions are always welcome!

Please adhere to this project's `code of conduct`.

1. Fork the Project
2. Create your Feature Branch (`git checkout -b feature/AmazingFeature`)
3. Commit your Changes (`git commit -m 'Add some AmazingFeature'`)
4. Push to the Branch (`git push origin feature/AmazingFeature`)
5. Open a Pull Request"#;

const ACKNOWLEDGEMENTS_SEED: &str = r#"## Acknowledgements

- [Awesome Readme Templates](https://awesomeopensource.com/project/elangosundar/awesome-README-templates)
- [Awesome README](https://github.com/matiassingers/awesome-readme)
- [How to write a Good readme](https://bulldogjob.com/news/449-how-to-write-a-good-readme-for-your-github-project)"#;

const AUTHORS_SEED: &str = r#"## Authors

- [@yourusername](https://www.github.com/yourusername)

## 🚀 About Me
I'm a full stack developer..."#;

/// A section template: one of the five recognized catalog entries, or a
/// custom title with no seed content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SectionTemplate {
    Features,
    Installation,
    Contributing,
    Acknowledgements,
    Authors,
    Custom(String),
}

impl SectionTemplate {
    /// Resolves a caller-supplied title against the catalog.
    ///
    /// Matching is exact; any unrecognized title (including blank) becomes
    /// `Custom` with empty seed content.
    pub fn from_title(title: impl Into<String>) -> Self {
        let title = title.into();
        match title.as_str() {
            "Features" => SectionTemplate::Features,
            "Installation" => SectionTemplate::Installation,
            "Contributing" => SectionTemplate::Contributing,
            "Acknowledgements" => SectionTemplate::Acknowledgements,
            "Authors" => SectionTemplate::Authors,
            _ => SectionTemplate::Custom(title),
        }
    }

    /// Returns the five catalog entries in display order.
    pub fn catalog() -> [SectionTemplate; 5] {
        [
            SectionTemplate::Features,
            SectionTemplate::Installation,
            SectionTemplate::Contributing,
            SectionTemplate::Acknowledgements,
            SectionTemplate::Authors,
        ]
    }

    /// Returns the display title.
    pub fn title(&self) -> &str {
        match self {
            SectionTemplate::Features => "Features",
            SectionTemplate::Installation => "Installation",
            SectionTemplate::Contributing => "Contributing",
            SectionTemplate::Acknowledgements => "Acknowledgements",
            SectionTemplate::Authors => "Authors",
            SectionTemplate::Custom(title) => title,
        }
    }

    /// Returns the seed Markdown body for this template.
    ///
    /// Catalog seeds carry their own `##` heading; custom templates seed
    /// empty content.
    pub fn seed_content(&self) -> &'static str {
        match self {
            SectionTemplate::Features => FEATURES_SEED,
            SectionTemplate::Installation => INSTALLATION_SEED,
            SectionTemplate::Contributing => CONTRIBUTING_SEED,
            SectionTemplate::Acknowledgements => ACKNOWLEDGEMENTS_SEED,
            SectionTemplate::Authors => AUTHORS_SEED,
            SectionTemplate::Custom(_) => "",
        }
    }

    /// Returns true for templates outside the fixed catalog.
    pub fn is_custom(&self) -> bool {
        matches!(self, SectionTemplate::Custom(_))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_titles_resolve_to_catalog_entries() {
        assert_eq!(
            SectionTemplate::from_title("Features"),
            SectionTemplate::Features
        );
        assert_eq!(
            SectionTemplate::from_title("Installation"),
            SectionTemplate::Installation
        );
        assert_eq!(
            SectionTemplate::from_title("Contributing"),
            SectionTemplate::Contributing
        );
        assert_eq!(
            SectionTemplate::from_title("Acknowledgements"),
            SectionTemplate::Acknowledgements
        );
        assert_eq!(
            SectionTemplate::from_title("Authors"),
            SectionTemplate::Authors
        );
    }

    #[test]
    fn unrecognized_title_becomes_custom() {
        let template = SectionTemplate::from_title("Roadmap");
        assert_eq!(template, SectionTemplate::Custom("Roadmap".to_string()));
        assert!(template.is_custom());
        assert_eq!(template.seed_content(), "");
    }

    #[test]
    fn matching_is_exact_not_case_insensitive() {
        assert!(SectionTemplate::from_title("features").is_custom());
        assert!(SectionTemplate::from_title(" Features").is_custom());
    }

    #[test]
    fn blank_title_is_permitted_as_custom() {
        let template = SectionTemplate::from_title("");
        assert_eq!(template, SectionTemplate::Custom(String::new()));
        assert_eq!(template.title(), "");
    }

    #[test]
    fn catalog_has_five_entries_in_display_order() {
        let catalog = SectionTemplate::catalog();
        let titles: Vec<&str> = catalog.iter().map(|t| t.title()).collect();
        assert_eq!(
            titles,
            vec![
                "Features",
                "Installation",
                "Contributing",
                "Acknowledgements",
                "Authors"
            ]
        );
    }

    #[test]
    fn every_catalog_seed_carries_its_own_heading() {
        for template in SectionTemplate::catalog() {
            let expected_heading = format!("## {}", template.title());
            assert!(
                template.seed_content().starts_with(&expected_heading),
                "seed for {:?} must start with {}",
                template,
                expected_heading
            );
        }
    }

    #[test]
    fn installation_seed_contains_fenced_shell_block() {
        let seed = SectionTemplate::Installation.seed_content();
        assert!(seed.contains("```bash"));
        assert!(seed.contains("npm install my-project"));
        assert!(seed.contains("cd my-project"));
        assert!(seed.contains("npm start"));
        assert!(seed.ends_with("```"));
    }

    #[test]
    fn contributing_seed_lists_five_numbered_steps() {
        let seed = SectionTemplate::Contributing.seed_content();
        for step in ["1. ", "2. ", "3. ", "4. ", "5. "] {
            assert!(seed.contains(step), "missing step {}", step);
        }
        assert!(seed.contains("Open a Pull Request"));
    }
}
