use std::path::{Path, PathBuf};

use crate::content::{Content, Error, Result};

impl Content {
    /// Read the page content from a YAML document.
    ///
    /// Sections missing from the document keep their built-in value, so a
    /// file only listing `projects:` replaces the projects and nothing else.
    pub fn read(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|error| Error::IO {
            error,
            path: PathBuf::from(path),
        })?;

        Self::from_yaml(&contents, path)
    }

    pub fn from_yaml(contents: &str, path: &Path) -> Result<Self> {
        let content: Self = serde_yml::from_str(contents).map_err(|error| Error::Deserialize {
            error: format!("content is not valid YAML: {}", error),
            path: PathBuf::from(path),
        })?;

        log::info!(
            "loaded content from \"{}\": {} education entries, {} projects",
            path.display(),
            content.education.len(),
            content.projects.len(),
        );

        Ok(content)
    }

    /// Load the content from `path` if one was configured, the built-in
    /// content otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::read(path),
            None => {
                log::info!("using the built-in content");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_keeps_builtin_sections() {
        let yaml = r#"
projects:
  - title: Compiler
    description: A toy compiler.
"#;
        let content = Content::from_yaml(yaml, Path::new("inline.yaml")).unwrap();
        assert_eq!(1, content.projects.len());
        assert_eq!("Compiler", content.projects[0].title);
        assert_eq!(Content::default().education, content.education);
        assert_eq!(Content::default().contact, content.contact);
    }

    #[test]
    fn invalid_yaml_is_a_deserialize_error() {
        let err = Content::from_yaml("projects: [", Path::new("broken.yaml")).unwrap_err();
        match err {
            Error::Deserialize { path, .. } => assert_eq!(PathBuf::from("broken.yaml"), path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Content::read(Path::new("does/not/exist.yaml")).unwrap_err();
        assert!(matches!(err, Error::IO { .. }));
        assert!(err.to_string().contains("does/not/exist.yaml"));
    }

    #[test]
    fn no_path_means_builtin_content() {
        let content = Content::load(None).unwrap();
        assert_eq!(Content::default(), content);
    }
}
