use super::helpers::TestProject;

const MANIFEST: &str = r#"// !$*UTF8*$!
{
	objects = {
/* Begin XCRemoteSwiftPackageReference section */
		AA01 /* XCRemoteSwiftPackageReference "swift-argument-parser" */ = {
			isa = XCRemoteSwiftPackageReference;
			repositoryURL = "https://github.com/apple/swift-argument-parser";
		};
		AA02 /* XCRemoteSwiftPackageReference "Sparkle" */ = {
			isa = XCRemoteSwiftPackageReference;
			repositoryURL = "https://github.com/sparkle-project/Sparkle.git";
		};
/* End XCRemoteSwiftPackageReference section */
	};
}
"#;

#[test]
fn test_project_directory_is_resolved_to_its_manifest() {
    let project = TestProject::new();
    project.write("App/App.xcodeproj/project.pbxproj", MANIFEST);

    // Every reference is excluded so no request leaves the machine.
    let output = project.run_credits(&[
        "App", "-o", "Credits.rtf", "-x", "swift-argument-parser", "-x", "Sparkle.git",
    ]);

    if !output.status.success() {
        eprintln!("STDERR: {}", String::from_utf8_lossy(&output.stderr));
    }
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Extracted 2 URLs"));
    assert!(stderr.contains("2 excluded"));
}

#[test]
fn test_manifest_without_packages_yields_nothing() {
    let project = TestProject::new();
    project.write("App.xcodeproj/project.pbxproj", "// !$*UTF8*$!\n{\n}\n");

    let output = project.run_credits(&["App.xcodeproj", "-o", "Credits.rtf"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Extracted 0 URLs"));
}
