//! Serializable backtrace reports
//!
//! The structured counterpart of the text lines: one [`FrameReport`] per
//! captured address, written as JSON by `execinfo demo --json`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::domain::Address;
use crate::symbolization::resolver::demangle;
use crate::symbolization::{resolve_with, DynamicLoader, SymbolSource, SymbolStyle};

/// One frame of a backtrace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameReport {
    pub index: usize,
    /// `%p` rendering of the return address
    pub address: String,
    /// Symbol name, absent when the loader only knew the module (or nothing)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Byte offset from the symbol base, absent for unresolved addresses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<isize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
}

/// A whole backtrace, outermost call last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BacktraceReport {
    pub depth: usize,
    pub frames: Vec<FrameReport>,
}

impl BacktraceReport {
    /// Resolve `addresses` through the process's dynamic loader.
    #[must_use]
    pub fn from_addresses(addresses: &[Address], style: SymbolStyle) -> Self {
        Self::from_addresses_with(&DynamicLoader, addresses, style)
    }

    /// Resolve `addresses` through `source`.
    pub fn from_addresses_with<S>(source: &S, addresses: &[Address], style: SymbolStyle) -> Self
    where
        S: SymbolSource + ?Sized,
    {
        let frames = addresses
            .iter()
            .enumerate()
            .map(|(index, &addr)| {
                resolve_with(source, addr, |record| {
                    let symbol = record.has_name().then(|| symbol_name(record.symbol_name, style));
                    FrameReport {
                        index,
                        address: record.address.to_string(),
                        symbol,
                        offset: record.resolved.then_some(record.byte_offset),
                        module: record
                            .resolved
                            .then(|| String::from_utf8_lossy(record.module_path).into_owned()),
                    }
                })
            })
            .collect();

        Self { depth: addresses.len(), frames }
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, self).context("Failed to serialize backtrace")?;
        writeln!(writer).context("Failed to write backtrace")?;
        Ok(())
    }
}

fn symbol_name(raw: &[u8], style: SymbolStyle) -> String {
    if style == SymbolStyle::Demangled {
        if let Ok(Some(name)) = demangle(raw) {
            return name;
        }
    }
    String::from_utf8_lossy(raw).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolization::testing::FakeLoader;

    fn demo_report(style: SymbolStyle) -> BacktraceReport {
        let addresses = [Address(0x1010), Address(0x9999), Address(0x3100), Address(0x2004)];
        BacktraceReport::from_addresses_with(&FakeLoader::demo(), &addresses, style)
    }

    #[test]
    fn test_frames_mirror_records() {
        let report = demo_report(SymbolStyle::Raw);

        assert_eq!(report.depth, 4);
        assert_eq!(
            report.frames[0],
            FrameReport {
                index: 0,
                address: "0x1010".to_string(),
                symbol: Some("alpha".to_string()),
                offset: Some(16),
                module: Some("/opt/demo/libdemo.so".to_string()),
            }
        );
        assert_eq!(
            report.frames[1],
            FrameReport {
                index: 1,
                address: "0x9999".to_string(),
                symbol: None,
                offset: None,
                module: None,
            }
        );
        assert_eq!(report.frames[2].symbol, None, "module known, name unknown");
        assert_eq!(report.frames[2].module.as_deref(), Some("/opt/demo/stripped.so"));
    }

    #[test]
    fn test_demangled_symbols() {
        let report = demo_report(SymbolStyle::Demangled);
        assert_eq!(report.frames[3].symbol.as_deref(), Some("demo::beta"));
        assert_eq!(report.frames[0].symbol.as_deref(), Some("alpha"));
    }

    #[test]
    fn test_json_skips_absent_fields() {
        let report = demo_report(SymbolStyle::Raw);
        let mut out = Vec::new();
        report.write_json(&mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let unresolved = &json["frames"][1];
        assert_eq!(unresolved["address"], "0x9999");
        assert!(unresolved.get("symbol").is_none());
        assert!(unresolved.get("module").is_none());

        let parsed: BacktraceReport = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, report);
    }
}
