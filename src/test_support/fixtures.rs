//! Builders for nuspec documents and nupkg archives.

use std::io::{Cursor, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// A `<group>` inside `<dependencies>`.
#[derive(Debug, Clone)]
struct GroupFixture {
    target_framework: Option<String>,
    dependencies: Vec<(String, String)>,
}

/// Builder for `.nuspec` manifest text.
#[derive(Debug, Clone)]
pub struct NuspecFixture {
    id: String,
    version: String,
    groups: Vec<GroupFixture>,
    dependencies: Vec<(String, String)>,
}

impl NuspecFixture {
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        NuspecFixture {
            id: id.into(),
            version: version.into(),
            groups: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    /// Add a group, scoped to `target_framework` when given.
    pub fn group(mut self, target_framework: Option<&str>, deps: &[(&str, &str)]) -> Self {
        self.groups.push(GroupFixture {
            target_framework: target_framework.map(str::to_string),
            dependencies: deps
                .iter()
                .map(|(id, v)| (id.to_string(), v.to_string()))
                .collect(),
        });
        self
    }

    /// Add a dependency outside any group.
    pub fn dependency(mut self, id: &str, version: &str) -> Self {
        self.dependencies.push((id.to_string(), version.to_string()));
        self
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
             <package xmlns=\"http://schemas.microsoft.com/packaging/2013/05/nuspec.xsd\">\n\
             \x20 <metadata>\n",
        );
        xml.push_str(&format!("    <id>{}</id>\n", self.id));
        xml.push_str(&format!("    <version>{}</version>\n", self.version));

        if !self.groups.is_empty() || !self.dependencies.is_empty() {
            xml.push_str("    <dependencies>\n");
            for group in &self.groups {
                match &group.target_framework {
                    Some(tfm) => xml.push_str(&format!(
                        "      <group targetFramework=\"{}\">\n",
                        tfm
                    )),
                    None => xml.push_str("      <group>\n"),
                }
                for (id, version) in &group.dependencies {
                    xml.push_str(&format!(
                        "        <dependency id=\"{}\" version=\"{}\" />\n",
                        id, version
                    ));
                }
                xml.push_str("      </group>\n");
            }
            for (id, version) in &self.dependencies {
                xml.push_str(&format!(
                    "      <dependency id=\"{}\" version=\"{}\" />\n",
                    id, version
                ));
            }
            xml.push_str("    </dependencies>\n");
        }

        xml.push_str("  </metadata>\n</package>\n");
        xml
    }
}

/// Builder for `.nupkg` archive bytes.
#[derive(Debug, Clone, Default)]
pub struct NupkgFixture {
    files: Vec<(String, Vec<u8>)>,
}

impl NupkgFixture {
    pub fn new() -> Self {
        NupkgFixture::default()
    }

    /// Add an entry. Entries are written in insertion order.
    pub fn file(mut self, name: &str, content: impl AsRef<[u8]>) -> Self {
        self.files.push((name.to_string(), content.as_ref().to_vec()));
        self
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for (name, content) in &self.files {
            writer.start_file(name.as_str(), options).unwrap();
            writer.write_all(content).unwrap();
        }

        writer.finish().unwrap().into_inner()
    }
}

/// Write a fixture archive to `path`, creating parent directories.
pub fn write_nupkg(path: &Path, fixture: &NupkgFixture) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, fixture.to_bytes()).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nuspec_fixture_shape() {
        let xml = NuspecFixture::new("Foo", "1.0.0")
            .group(Some("net45"), &[("Bar", "2.0.0")])
            .dependency("Baz", "3.0.0")
            .to_xml();

        assert!(xml.contains("<group targetFramework=\"net45\">"));
        assert!(xml.contains("<dependency id=\"Bar\" version=\"2.0.0\" />"));
        assert!(xml.contains("<dependency id=\"Baz\" version=\"3.0.0\" />"));
    }

    #[test]
    fn test_nuspec_fixture_without_dependencies() {
        let xml = NuspecFixture::new("Foo", "1.0.0").to_xml();
        assert!(!xml.contains("<dependencies>"));
    }
}
