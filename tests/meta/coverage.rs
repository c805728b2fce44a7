//! Checks that every source file has a unit test counterpart and vice versa

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    // Entry points and module organization files need no counterpart
    fn is_structural(relative: &str) -> bool {
        let file_name = relative.rsplit('/').next().unwrap_or(relative);
        matches!(file_name, "lib.rs" | "main.rs" | "mod.rs")
    }

    fn mirrored_paths(root: &Path) -> BTreeSet<String> {
        let mut paths = BTreeSet::new();
        collect(root, root, &mut paths).unwrap_or_else(|error| {
            unreachable!("Failed to scan {}: {error}", root.display());
        });
        paths.retain(|relative| !is_structural(relative));
        paths
    }

    fn collect(dir: &Path, base: &Path, paths: &mut BTreeSet<String>) -> Result<(), io::Error> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|_strip_error| io::Error::other("Failed to strip prefix"))?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                paths.insert(relative);
                collect(&path, base, paths)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative);
            }
        }
        Ok(())
    }

    #[test]
    fn test_all_src_files_have_unit_tests() {
        let src = mirrored_paths(Path::new("src"));
        let unit = mirrored_paths(Path::new("tests/unit"));

        let missing: Vec<String> = src
            .difference(&unit)
            .map(|relative| format!("  - src/{relative} -> tests/unit/{relative}"))
            .collect();

        assert!(
            missing.is_empty(),
            "The following src files/directories are missing unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let src = mirrored_paths(Path::new("src"));
        let unit = mirrored_paths(Path::new("tests/unit"));

        let orphaned: Vec<String> = unit
            .difference(&src)
            .map(|relative| format!("  - tests/unit/{relative} -> src/{relative} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "The following unit test files/directories have no corresponding src files:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let tests_dir = Path::new("tests");
        let mut files = BTreeSet::new();
        collect(tests_dir, tests_dir, &mut files).unwrap_or_else(|error| {
            unreachable!("Failed to scan tests directory: {error}");
        });

        let without_tests: Vec<String> = files
            .iter()
            .filter(|relative| relative.ends_with(".rs") && !is_structural(relative))
            .filter(|relative| {
                fs::read_to_string(tests_dir.join(relative.as_str()))
                    .is_ok_and(|content| !content.contains("#[test]"))
            })
            .map(|relative| format!("  - tests/{relative}"))
            .collect();

        assert!(
            without_tests.is_empty(),
            "The following test files don't contain any #[test] functions:\n{}",
            without_tests.join("\n")
        );
    }
}
