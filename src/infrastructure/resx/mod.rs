//! WinForms `.resx` bundle writer
//!
//! Each icon is stored as a `System.Drawing.Icon` resource whose value is the
//! base64 of the ICO file. Resource keys are the PascalCase icon names.

use std::collections::HashSet;
use std::io;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::domain::value_objects::resource_key;

const WINFORMS_ASSEMBLY: &str =
    "System.Windows.Forms, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089";
const DRAWING_ASSEMBLY: &str =
    "System.Drawing, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b03f5f7f11d50a3a";
const ICON_TYPE: &str = "System.Drawing.Icon, System.Drawing";
const BYTEARRAY_MIMETYPE: &str = "application/x-microsoft.net.object.bytearray.base64";

/// Key already taken by another icon in the same bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKey {
    pub key: String,
    pub icon: String,
}

impl std::fmt::Display for DuplicateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "resource key '{}' for {} is already used", self.key, self.icon)
    }
}

/// In-memory resx document
#[derive(Debug, Clone, Default)]
pub struct ResxBundle {
    entries: Vec<(String, Vec<u8>)>,
    keys: HashSet<String>,
}

impl ResxBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an icon; entries keep insertion order.
    pub fn add_icon(&mut self, icon_name: &str, ico_bytes: &[u8]) -> Result<(), DuplicateKey> {
        let key = resource_key(icon_name);
        if !self.keys.insert(key.clone()) {
            return Err(DuplicateKey {
                key,
                icon: icon_name.to_string(),
            });
        }
        self.entries.push((key, ico_bytes.to_vec()));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the bundle as resx XML
    pub fn to_xml(&self) -> io::Result<Vec<u8>> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

        emit(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        emit(&mut writer, Event::Start(BytesStart::new("root")))?;

        let reader = format!("System.Resources.ResXResourceReader, {}", WINFORMS_ASSEMBLY);
        let resx_writer = format!("System.Resources.ResXResourceWriter, {}", WINFORMS_ASSEMBLY);
        for (name, value) in [
            ("resmimetype", "text/microsoft-resx"),
            ("version", "2.0"),
            ("reader", reader.as_str()),
            ("writer", resx_writer.as_str()),
        ] {
            write_valued(
                &mut writer,
                BytesStart::new("resheader").with_attributes([("name", name)]),
                value,
            )?;
        }

        if !self.entries.is_empty() {
            emit(
                &mut writer,
                Event::Empty(
                    BytesStart::new("assembly")
                        .with_attributes([("alias", "System.Drawing"), ("name", DRAWING_ASSEMBLY)]),
                ),
            )?;
        }

        for (key, bytes) in &self.entries {
            let data = BytesStart::new("data").with_attributes([
                ("name", key.as_str()),
                ("type", ICON_TYPE),
                ("mimetype", BYTEARRAY_MIMETYPE),
            ]);
            write_valued(&mut writer, data, &STANDARD.encode(bytes))?;
        }

        emit(&mut writer, Event::End(BytesEnd::new("root")))?;

        let mut out = writer.into_inner();
        out.push(b'\n');
        Ok(out)
    }
}

/// `<tag ...><value>text</value></tag>`
fn write_valued(writer: &mut Writer<Vec<u8>>, start: BytesStart<'_>, value: &str) -> io::Result<()> {
    let end = start.to_end().into_owned();
    emit(writer, Event::Start(start))?;
    emit(writer, Event::Start(BytesStart::new("value")))?;
    emit(writer, Event::Text(BytesText::new(value)))?;
    emit(writer, Event::End(BytesEnd::new("value")))?;
    emit(writer, Event::End(end))
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> io::Result<()> {
    writer
        .write_event(event)
        .map_err(|e| io::Error::other(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xml(bundle: &ResxBundle) -> String {
        String::from_utf8(bundle.to_xml().unwrap()).unwrap()
    }

    #[test]
    fn empty_bundle_has_headers_only() {
        let out = xml(&ResxBundle::new());

        assert!(out.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(out.contains("<resheader name=\"resmimetype\">"));
        assert!(out.contains("<value>text/microsoft-resx</value>"));
        assert!(out.contains("<value>2.0</value>"));
        assert!(!out.contains("<data"));
        assert!(!out.contains("<assembly"));
        assert!(out.trim_end().ends_with("</root>"));
    }

    #[test]
    fn icons_are_base64_icon_resources() {
        let mut bundle = ResxBundle::new();
        bundle.add_icon("arrow-down", b"ICO").unwrap();

        let out = xml(&bundle);

        assert!(out.contains(
            "<data name=\"ArrowDown\" type=\"System.Drawing.Icon, System.Drawing\" mimetype=\"application/x-microsoft.net.object.bytearray.base64\">"
        ));
        assert!(out.contains("<value>SUNP</value>"));
        assert!(out.contains("<assembly alias=\"System.Drawing\""));
    }

    #[test]
    fn entries_keep_insertion_order() {
        let mut bundle = ResxBundle::new();
        bundle.add_icon("zap", b"z").unwrap();
        bundle.add_icon("anchor", b"a").unwrap();

        let out = xml(&bundle);

        assert!(out.find("\"Zap\"").unwrap() < out.find("\"Anchor\"").unwrap());
        assert_eq!(bundle.len(), 2);
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let mut bundle = ResxBundle::new();
        bundle.add_icon("a-b", b"1").unwrap();

        let err = bundle.add_icon("a_b", b"2").unwrap_err();

        assert_eq!(err.key, "AB");
        assert_eq!(bundle.len(), 1);
    }

    #[test]
    fn output_is_deterministic() {
        let mut bundle = ResxBundle::new();
        bundle.add_icon("anchor", b"abc").unwrap();

        assert_eq!(bundle.to_xml().unwrap(), bundle.to_xml().unwrap());
    }
}
