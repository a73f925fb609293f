//! Human-readable field dump.
//!
//! [`Dump`] flattens a decoded record into named sections of `key: value`
//! pairs. Its `Display` output is the text dump printed by the CLI; with the
//! `serde` feature the same structure serializes to JSON.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use frd_mii::ChecksummedMiiData;

use crate::MyData;

/// One `key: value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DumpEntry {
    pub key: &'static str,
    pub value: String,
}

/// A titled group of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DumpSection {
    pub name: &'static str,
    pub entries: Vec<DumpEntry>,
}

impl DumpSection {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: Vec::new(),
        }
    }

    fn push(&mut self, key: &'static str, value: impl ToString) {
        self.entries.push(DumpEntry {
            key,
            value: value.to_string(),
        });
    }

    /// Section listing every sub-field of a bit group.
    fn from_fields(
        name: &'static str,
        fields: impl Iterator<Item = (&'static str, u64)>,
    ) -> Self {
        let mut section = Self::new(name);
        for (key, value) in fields {
            section.push(key, value);
        }
        section
    }

    /// Look up an entry value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }
}

/// Every decoded field of a record, in layout order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Dump {
    pub sections: Vec<DumpSection>,
}

impl Dump {
    /// Dump a full `mydata` record, including its Mii.
    pub fn from_my_data(data: &MyData) -> Self {
        let mut header = DumpSection::new("mydata");
        header.push("magic", format!("{:#010x}", data.magic.get()));
        header.push("magic_number", format!("{:#010x}", data.magic_number.get()));
        header.push("padding1", data.padding1.get());
        header.push("unk10", byte_list(&data.unk10));
        header.push("comment", data.comment());
        header.push("unk50", data.unk50.get());
        header.push("local_friend_code_seed", data.local_friend_code_seed());
        header.push("unk68", data.hex_identifier());
        header.push(
            "serial_number",
            data.full_serial_number()
                .unwrap_or_else(|_| data.serial_number()),
        );
        header.push("display_name", data.display_name());
        header.push("padding2", byte_list(&data.padding2));
        header.push("padding3", byte_list(&data.padding3));

        let mut profile = DumpSection::new("profile");
        profile.push("region", data.profile.region);
        profile.push("country", data.profile.country);
        profile.push("area", data.profile.area);
        profile.push("language", data.profile.language);
        profile.push("platform", data.profile.platform);

        let mut sections = vec![header, profile];
        sections.extend(Self::from_mii(&data.mii_data).sections);
        Self { sections }
    }

    /// Dump a checksummed Mii record.
    pub fn from_mii(data: &ChecksummedMiiData) -> Self {
        let mii = data.mii_data();

        let mut summary = DumpSection::new("mii_data");
        summary.push("magic", mii.magic);
        summary.push("system_id", format!("{:016x}", mii.system_id()));
        summary.push("mii_id", format!("{:08x}", mii.mii_id()));
        summary.push("mac", mii.mac_string());
        summary.push("pad", mii.pad.get());
        summary.push("mii_name", mii.name());
        summary.push("height", mii.height);
        summary.push("width", mii.width);
        summary.push("hair_style", mii.hair_style);
        summary.push("author_name", mii.author());
        summary.push("unknown", format!("{:#06x}", data.unknown()));
        summary.push("checksum", format!("{:#06x}", data.checksum()));
        summary.push("computed_checksum", format!("{:#06x}", data.calc_checksum()));
        summary.push("checksum_valid", data.is_checksum_valid());

        let sections = vec![
            summary,
            DumpSection::from_fields("mii_options", mii.mii_options.fields()),
            DumpSection::from_fields("mii_pos", mii.mii_pos.fields()),
            DumpSection::from_fields("console_identity", mii.console_identity.fields()),
            DumpSection::from_fields("mii_details", mii.mii_details.fields()),
            DumpSection::from_fields("face_style", mii.face_style.fields()),
            DumpSection::from_fields("face_details", mii.face_details.fields()),
            DumpSection::from_fields("hair_details", mii.hair_details.fields()),
            DumpSection::from_fields("eye_details", mii.eye_details.fields()),
            DumpSection::from_fields("eyebrow_details", mii.eyebrow_details.fields()),
            DumpSection::from_fields("nose_details", mii.nose_details.fields()),
            DumpSection::from_fields("mouth_details", mii.mouth_details.fields()),
            DumpSection::from_fields("mustache_details", mii.mustache_details.fields()),
            DumpSection::from_fields("beard_details", mii.beard_details.fields()),
            DumpSection::from_fields("glasses_details", mii.glasses_details.fields()),
            DumpSection::from_fields("mole_details", mii.mole_details.fields()),
        ];
        Self { sections }
    }

    /// Find a section by name.
    pub fn section(&self, name: &str) -> Option<&DumpSection> {
        self.sections.iter().find(|section| section.name == name)
    }
}

impl fmt::Display for Dump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}:", section.name)?;
            for entry in &section.entries {
                writeln!(f, "{}: {}", entry.key, entry.value)?;
            }
        }
        Ok(())
    }
}

/// Space-separated decimal byte values.
fn byte_list(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
