use crate::commands::{CmdContext, CmdMessage, CmdResult};
use crate::error::{BoxError, Result};
use crate::model::{Kind, Module};
use crate::store::DataStore;
use crate::trace::PageAddress;
use chrono::Local;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

const USAGE: &str = "Please use the format: export <pageContent> / <task|file|grade|note|all>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTarget {
    One(Kind),
    All,
}

/// `export <page> / <kind|all>`. Writes under `<data dir>/<export_dir>/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportCommand {
    module_code: Option<String>,
    target: ExportTarget,
}

impl ExportCommand {
    pub fn parse(address: &PageAddress, content: &str) -> Result<Self> {
        let word = content.trim().to_lowercase();
        let target = match word.as_str() {
            "all" => ExportTarget::All,
            other => ExportTarget::One(
                other
                    .parse()
                    .map_err(|_| BoxError::Parse(USAGE.to_string()))?,
            ),
        };
        Ok(Self {
            module_code: address.module_code().map(str::to_string),
            target,
        })
    }

    pub fn target(&self) -> ExportTarget {
        self.target
    }

    pub fn run<S: DataStore>(&self, ctx: &mut CmdContext<'_, S>) -> Result<CmdResult> {
        let module = ctx.registry.require(self.module_code.as_deref())?;
        let kinds: Vec<Kind> = match self.target {
            ExportTarget::One(kind) => vec![kind],
            ExportTarget::All => Kind::ALL.to_vec(),
        };
        if kinds.iter().all(|&kind| module.len(kind) == 0) {
            return Ok(CmdResult::default().with_message(CmdMessage::info(match self.target {
                ExportTarget::One(kind) => format!("There are no {} to export.", kind.plural()),
                ExportTarget::All => "There is nothing to export in this module.".to_string(),
            })));
        }

        let dir = ctx.data_dir.join(&ctx.config.export_dir);
        fs::create_dir_all(&dir)?;

        let path = match self.target {
            ExportTarget::One(kind) => {
                let path = dir.join(format!("{}-{}.txt", module.code(), kind.plural()));
                fs::write(&path, listing(module, kind))?;
                path
            }
            ExportTarget::All => {
                let stamp = Local::now().format("%Y%m%d-%H%M%S");
                let path: PathBuf = dir.join(format!("{}-{}.tar.gz", module.code(), stamp));
                write_archive(File::create(&path)?, module)?;
                path
            }
        };
        tracing::info!(module = module.code(), path = %path.display(), "exported");

        Ok(CmdResult::default()
            .with_message(CmdMessage::success(format!("Exported to {}", path.display()))))
    }
}

/// Numbered display lines, newline terminated.
fn listing(module: &Module, kind: Kind) -> String {
    let mut text = module.numbered(kind).join("\n");
    text.push('\n');
    text
}

/// One `<CODE>/<kind>.txt` entry per non-empty collection.
fn write_archive<W: Write>(writer: W, module: &Module) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    for kind in Kind::ALL {
        if module.len(kind) == 0 {
            continue;
        }
        let content = listing(module, kind);
        let entry_name = format!("{}/{}.txt", module.code(), kind.plural());

        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();

        tar.append_data(&mut header, entry_name, content.as_bytes())?;
    }

    tar.into_inner()?.finish()?;
    Ok(())
}
