//! Output service implementations

pub mod filesystem_output;

pub use filesystem_output::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{Artifact, OutputService};
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_filesystem_output_write_artifacts() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_service = FileSystemOutputService::new(temp_dir.path());

        let artifacts = vec![
            Artifact {
                path: PathBuf::from("tests/resources/payloads/videos/list/responses/200.json"),
                content: "{}\n".to_string(),
            },
            Artifact {
                path: PathBuf::from("README.md"),
                content: "# Client".to_string(),
            },
        ];

        let written = output_service.write_artifacts(&artifacts).unwrap();

        assert_eq!(written.len(), 2);
        let fixture = temp_dir
            .path()
            .join("tests/resources/payloads/videos/list/responses/200.json");
        assert_eq!(std::fs::read_to_string(fixture).unwrap(), "{}\n");
        assert_eq!(output_service.root(), temp_dir.path());
    }

    #[test]
    fn test_filesystem_output_empty_is_noop() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_service = FileSystemOutputService::new(temp_dir.path().join("missing"));

        assert!(output_service.write_artifacts(&[]).unwrap().is_empty());
        assert!(!temp_dir.path().join("missing").exists());
    }
}
