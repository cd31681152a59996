//! Remote Swift package references in an Xcode `project.pbxproj`.

const SECTION_BEGIN: &str = "/* Begin XCRemoteSwiftPackageReference section */";
const SECTION_END: &str = "/* End XCRemoteSwiftPackageReference section */";
const REPOSITORY_URL_KEY: &str = "repositoryURL";

/// Repository URLs declared in the `XCRemoteSwiftPackageReference` section.
///
/// A manifest without that section has no remote packages, so the result is
/// empty rather than an error.
pub fn parse_package_references(content: &str) -> Vec<String> {
    let Some(section) = package_section(content) else {
        return Vec::new();
    };

    section
        .lines()
        .filter(|line| line.contains(REPOSITORY_URL_KEY))
        .filter_map(first_quoted)
        .map(str::to_string)
        .collect()
}

fn package_section(content: &str) -> Option<&str> {
    let start = content.find(SECTION_BEGIN)? + SECTION_BEGIN.len();
    let len = content[start..].find(SECTION_END)?;
    Some(&content[start..start + len])
}

fn first_quoted(line: &str) -> Option<&str> {
    let open = line.find('"')? + 1;
    let close = line[open..].find('"')?;
    Some(&line[open..open + close])
}
