//! XML descriptor encoding.
//!
//! The XML schema uses different element names from the JSON keys
//! (`Downloadables` vs `Downloadable`, `Requires` vs `Require`, ...), so this
//! module keeps its own wire types and converts them to and from the model.
//! Sequences are written as repeated sibling elements; enumerations travel as
//! plain text so that blank values survive a round trip.

use std::str::FromStr;

use quick_xml::events::{BytesText, Event};
use quick_xml::{Reader, Writer};
use serde::{Deserialize, Serialize};

use super::error::{CodecError, CodecResult};
use super::Format;
use crate::descriptor::{
    Choice, CompatOrder, Configuration, DonationLink, Download, DownloadFiles, Game,
    InstallType, Mod, ModCompat, ModCompatibility, ModDir, ModFile, Preview, SelectionType,
    Size,
};

const ROOT_TAG: &str = "Mod";

pub fn decode(text: &str) -> CodecResult<Mod> {
    let wire: XmlMod =
        quick_xml::de::from_str(text).map_err(|e| CodecError::decode(Format::Xml, e))?;
    wire.try_into()
}

pub fn encode(descriptor: &Mod) -> CodecResult<String> {
    let wire = XmlMod::from(descriptor);
    let mut buffer = String::new();
    let mut serializer = quick_xml::se::Serializer::with_root(&mut buffer, Some(ROOT_TAG))
        .map_err(|e| CodecError::encode(Format::Xml, e))?;
    serializer.indent('\t', 1);
    wire.serialize(serializer)
        .map_err(|e| CodecError::encode(Format::Xml, e))?;
    protect_edge_whitespace(&buffer)
}

/// Rewrite leading and trailing whitespace of element values as character
/// references.
///
/// The deserializer trims raw whitespace around text content, so a value
/// such as `"Font "` would otherwise decode as `"Font"`. References are
/// resolved after trimming and survive.
fn protect_edge_whitespace(xml: &str) -> CodecResult<String> {
    let mut reader = Reader::from_str(xml);
    let mut events = Vec::new();
    loop {
        match reader
            .read_event()
            .map_err(|e| CodecError::encode(Format::Xml, e))?
        {
            Event::Eof => break,
            event => events.push(event),
        }
    }

    let is_value: Vec<bool> = (0..events.len())
        .map(|i| {
            i > 0
                && i + 1 < events.len()
                && matches!(events[i - 1], Event::Start(_))
                && matches!(events[i + 1], Event::End(_))
        })
        .collect();

    let mut writer = Writer::new(Vec::with_capacity(xml.len()));
    for (event, is_value) in events.into_iter().zip(is_value) {
        let event = match event {
            Event::Text(text) if is_value => {
                let escaped = std::str::from_utf8(&text)
                    .map_err(|e| CodecError::encode(Format::Xml, e))?;
                Event::Text(BytesText::from_escaped(reference_edges(escaped)))
            }
            other => other,
        };
        writer
            .write_event(event)
            .map_err(|e| CodecError::encode(Format::Xml, e))?;
    }
    String::from_utf8(writer.into_inner()).map_err(|e| CodecError::encode(Format::Xml, e))
}

fn is_xml_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

fn char_reference(c: char) -> &'static str {
    match c {
        '\t' => "&#x9;",
        '\n' => "&#xA;",
        '\r' => "&#xD;",
        _ => "&#x20;",
    }
}

fn reference_edges(escaped: &str) -> String {
    let body = escaped.trim_matches(is_xml_whitespace);
    let lead = escaped.len() - escaped.trim_start_matches(is_xml_whitespace).len();
    let (head, rest) = escaped.split_at(lead);
    let tail = &rest[body.len()..];

    let mut out = String::with_capacity(escaped.len() + 8 * (head.len() + tail.len()));
    out.extend(head.chars().map(char_reference));
    out.push_str(body);
    out.extend(tail.chars().map(char_reference));
    out
}

fn parse_optional<T>(field: &'static str, raw: &str) -> CodecResult<Option<T>>
where
    T: FromStr<Err = crate::descriptor::ParseTagError>,
{
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|source| CodecError::InvalidTag { field, source })
}

fn text_of<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct XmlMod {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Author")]
    author: String,
    #[serde(rename = "Version")]
    version: String,
    #[serde(rename = "ReleaseDate")]
    release_date: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "ReleaseNotes")]
    release_notes: String,
    #[serde(rename = "Link")]
    link: String,
    #[serde(rename = "ModFileLink")]
    mod_file_links: Vec<String>,
    #[serde(rename = "Preview", skip_serializing_if = "Option::is_none")]
    preview: Option<XmlPreview>,
    #[serde(rename = "ModCompatibility", skip_serializing_if = "Option::is_none")]
    compatibility: Option<XmlCompatibility>,
    #[serde(rename = "Downloadables")]
    downloadables: Vec<XmlDownload>,
    #[serde(rename = "DonationLinks")]
    donation_links: Vec<XmlDonationLink>,
    #[serde(rename = "Games")]
    games: Vec<XmlGame>,
    #[serde(rename = "DownloadFiles", skip_serializing_if = "Option::is_none")]
    always_install: Option<XmlDownloadFiles>,
    #[serde(rename = "Configurations")]
    configurations: Vec<XmlConfiguration>,
    #[serde(rename = "ConfigSelectionType")]
    selection_type: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct XmlPreview {
    #[serde(rename = "Url", skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(rename = "Local", skip_serializing_if = "Option::is_none")]
    local: Option<String>,
    #[serde(rename = "Size")]
    size: XmlSize,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct XmlSize {
    #[serde(rename = "X")]
    x: i64,
    #[serde(rename = "Y")]
    y: i64,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct XmlCompatibility {
    #[serde(rename = "Requires")]
    requires: Vec<XmlModCompat>,
    #[serde(rename = "Forbids")]
    forbids: Vec<XmlModCompat>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct XmlModCompat {
    #[serde(rename = "ModID")]
    mod_id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Versions")]
    versions: Vec<String>,
    #[serde(rename = "Source")]
    source: String,
    #[serde(rename = "Order", skip_serializing_if = "String::is_empty")]
    order: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct XmlDownload {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Sources")]
    sources: Vec<String>,
    #[serde(rename = "InstallType")]
    install_type: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct XmlDonationLink {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Link")]
    link: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct XmlGame {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "GameVersions")]
    versions: Vec<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct XmlDownloadFiles {
    #[serde(rename = "DownloadName")]
    download_name: String,
    #[serde(rename = "Files")]
    files: Vec<XmlModFile>,
    #[serde(rename = "Dirs")]
    dirs: Vec<XmlModDir>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct XmlModFile {
    #[serde(rename = "From")]
    from: String,
    #[serde(rename = "To")]
    to: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct XmlModDir {
    #[serde(rename = "From")]
    from: String,
    #[serde(rename = "To")]
    to: String,
    #[serde(rename = "Recursive")]
    recursive: bool,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct XmlConfiguration {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Preview", skip_serializing_if = "Option::is_none")]
    preview: Option<XmlPreview>,
    #[serde(rename = "Root")]
    root: bool,
    #[serde(rename = "Choices")]
    choices: Vec<XmlChoice>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct XmlChoice {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Preview", skip_serializing_if = "Option::is_none")]
    preview: Option<XmlPreview>,
    #[serde(rename = "DownloadFiles", skip_serializing_if = "Option::is_none")]
    download_files: Option<XmlDownloadFiles>,
    #[serde(rename = "NextConfigurationName", skip_serializing_if = "Option::is_none")]
    next_configuration_name: Option<String>,
}

// --- model -> wire ---

impl From<&Mod> for XmlMod {
    fn from(m: &Mod) -> Self {
        Self {
            id: m.id.clone(),
            name: m.name.clone(),
            author: m.author.clone(),
            version: m.version.clone(),
            release_date: m.release_date.clone(),
            category: m.category.clone(),
            description: m.description.clone(),
            release_notes: m.release_notes.clone(),
            link: m.link.clone(),
            mod_file_links: m.mod_file_links.clone(),
            preview: m.preview.as_ref().map(XmlPreview::from),
            compatibility: m.compatibility.as_ref().map(|c| XmlCompatibility {
                requires: c.requires.iter().map(XmlModCompat::from).collect(),
                forbids: c.forbids.iter().map(XmlModCompat::from).collect(),
            }),
            downloadables: m.downloadables.iter().map(XmlDownload::from).collect(),
            donation_links: m
                .donation_links
                .iter()
                .map(|d| XmlDonationLink {
                    name: d.name.clone(),
                    link: d.link.clone(),
                })
                .collect(),
            games: m
                .games
                .iter()
                .map(|g| XmlGame {
                    name: g.name.clone(),
                    versions: g.versions.clone(),
                })
                .collect(),
            always_install: m.always_install.as_ref().map(XmlDownloadFiles::from),
            configurations: m
                .configurations
                .iter()
                .map(XmlConfiguration::from)
                .collect(),
            selection_type: m.selection_type.to_string(),
        }
    }
}

impl From<&Preview> for XmlPreview {
    fn from(p: &Preview) -> Self {
        Self {
            url: p.url.clone(),
            local: p.local.clone(),
            size: XmlSize {
                x: p.size.x,
                y: p.size.y,
            },
        }
    }
}

impl From<&ModCompat> for XmlModCompat {
    fn from(c: &ModCompat) -> Self {
        Self {
            mod_id: c.mod_id.clone(),
            name: c.name.clone(),
            versions: c.versions.clone(),
            source: c.source.clone(),
            order: text_of(&c.order),
        }
    }
}

impl From<&Download> for XmlDownload {
    fn from(d: &Download) -> Self {
        Self {
            name: d.name.clone(),
            sources: d.sources.clone(),
            install_type: text_of(&d.install_type),
        }
    }
}

impl From<&DownloadFiles> for XmlDownloadFiles {
    fn from(f: &DownloadFiles) -> Self {
        Self {
            download_name: f.download_name.clone(),
            files: f
                .files
                .iter()
                .map(|file| XmlModFile {
                    from: file.from.clone(),
                    to: file.to.clone(),
                })
                .collect(),
            dirs: f
                .dirs
                .iter()
                .map(|dir| XmlModDir {
                    from: dir.from.clone(),
                    to: dir.to.clone(),
                    recursive: dir.recursive,
                })
                .collect(),
        }
    }
}

impl From<&Configuration> for XmlConfiguration {
    fn from(c: &Configuration) -> Self {
        Self {
            name: c.name.clone(),
            description: c.description.clone(),
            preview: c.preview.as_ref().map(XmlPreview::from),
            root: c.root,
            choices: c
                .choices
                .iter()
                .map(|ch| XmlChoice {
                    name: ch.name.clone(),
                    description: ch.description.clone(),
                    preview: ch.preview.as_ref().map(XmlPreview::from),
                    download_files: ch.download_files.as_ref().map(XmlDownloadFiles::from),
                    next_configuration_name: ch.next_configuration_name.clone(),
                })
                .collect(),
        }
    }
}

// --- wire -> model ---

impl TryFrom<XmlMod> for Mod {
    type Error = CodecError;

    fn try_from(w: XmlMod) -> CodecResult<Self> {
        let compatibility = match w.compatibility {
            Some(c) => Some(ModCompatibility {
                requires: convert_all(c.requires)?,
                forbids: convert_all(c.forbids)?,
            }),
            None => None,
        };

        Ok(Mod {
            id: w.id,
            name: w.name,
            author: w.author,
            version: w.version,
            release_date: w.release_date,
            category: w.category,
            description: w.description,
            release_notes: w.release_notes,
            link: w.link,
            mod_file_links: w.mod_file_links,
            preview: w.preview.map(Preview::from),
            compatibility,
            downloadables: convert_all(w.downloadables)?,
            donation_links: w
                .donation_links
                .into_iter()
                .map(|d| DonationLink {
                    name: d.name,
                    link: d.link,
                })
                .collect(),
            games: w
                .games
                .into_iter()
                .map(|g| Game {
                    name: g.name,
                    versions: g.versions,
                })
                .collect(),
            always_install: w.always_install.map(DownloadFiles::from),
            configurations: w
                .configurations
                .into_iter()
                .map(Configuration::from)
                .collect(),
            selection_type: parse_optional::<SelectionType>(
                "ConfigSelectionType",
                &w.selection_type,
            )?
            .unwrap_or_default(),
        })
    }
}

fn convert_all<W, T>(items: Vec<W>) -> CodecResult<Vec<T>>
where
    T: TryFrom<W, Error = CodecError>,
{
    items.into_iter().map(T::try_from).collect()
}

impl From<XmlPreview> for Preview {
    fn from(p: XmlPreview) -> Self {
        Preview {
            url: p.url,
            local: p.local,
            size: Size::new(p.size.x, p.size.y),
        }
    }
}

impl TryFrom<XmlModCompat> for ModCompat {
    type Error = CodecError;

    fn try_from(c: XmlModCompat) -> CodecResult<Self> {
        Ok(ModCompat {
            order: parse_optional::<CompatOrder>("Order", &c.order)?,
            mod_id: c.mod_id,
            name: c.name,
            versions: c.versions,
            source: c.source,
        })
    }
}

impl TryFrom<XmlDownload> for Download {
    type Error = CodecError;

    fn try_from(d: XmlDownload) -> CodecResult<Self> {
        Ok(Download {
            install_type: parse_optional::<InstallType>("InstallType", &d.install_type)?,
            name: d.name,
            sources: d.sources,
        })
    }
}

impl From<XmlDownloadFiles> for DownloadFiles {
    fn from(f: XmlDownloadFiles) -> Self {
        DownloadFiles {
            download_name: f.download_name,
            files: f
                .files
                .into_iter()
                .map(|file| ModFile::new(file.from, file.to))
                .collect(),
            dirs: f
                .dirs
                .into_iter()
                .map(|dir| ModDir::new(dir.from, dir.to, dir.recursive))
                .collect(),
        }
    }
}

impl From<XmlConfiguration> for Configuration {
    fn from(c: XmlConfiguration) -> Self {
        Configuration {
            name: c.name,
            description: c.description,
            preview: c.preview.map(Preview::from),
            root: c.root,
            choices: c
                .choices
                .into_iter()
                .map(|ch| Choice {
                    name: ch.name,
                    description: ch.description,
                    preview: ch.preview.map(Preview::from),
                    download_files: ch.download_files.map(DownloadFiles::from),
                    next_configuration_name: ch.next_configuration_name,
                })
                .collect(),
        }
    }
}
