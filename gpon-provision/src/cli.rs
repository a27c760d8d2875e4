use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "gpon-provision")]
#[command(about = "Generate, migrate and audit GPON/ONU provisioning snippets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Render a single-device template for one vendor operation.
    Render(RenderArgs),
    /// Rewrite a pasted Raisecom iphost status output onto ACS profiles.
    Acs(AcsArgs),
    /// Bulk-migrate a serial list against one config dump.
    Migrate(MigrateArgs),
    /// Compare per-device compliance across two config dumps.
    Compare(CompareArgs),
    /// Locate one serial's block and show its checklist state.
    Locate(LocateArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum VendorArg {
    Huawei,
    Raisecom,
    Bdcom,
    Zte,
    Fiberhome,
    Viberlink,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Target OLT vendor.
    #[arg(long, value_enum)]
    pub vendor: VendorArg,
    /// Operation name, e.g. config-v2-acs, config-v1, check-ip.
    #[arg(long)]
    pub op: String,
    /// ONT serial number.
    #[arg(long)]
    pub sn: Option<String>,
    #[arg(long)]
    pub frame: Option<String>,
    #[arg(long)]
    pub slot: Option<String>,
    #[arg(long)]
    pub port: Option<String>,
    #[arg(long)]
    pub ont_id: Option<String>,
    #[arg(long)]
    pub line_profile: Option<String>,
    /// Subscriber id, rendered into the description line.
    #[arg(long)]
    pub sid: Option<String>,
    /// Customer name; whitespace is folded to dots.
    #[arg(long)]
    pub name: Option<String>,
    /// PPPoE password. Defaults to today's date (YYYYMMDD).
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub vlan: Option<String>,
    /// ONU hardware type (Fiberhome/Viberlink whitelisting).
    #[arg(long)]
    pub onu_type: Option<String>,
    /// OLT generation where the vendor has more than one (zte: c320/c610,
    /// fiberhome: an6000/an5116).
    #[arg(long)]
    pub olt_type: Option<String>,
    /// Also write the snippet to a timestamped export file.
    #[arg(long)]
    pub export: bool,
}

#[derive(Parser, Debug)]
pub struct AcsArgs {
    /// File holding the pasted `show gpon-onu ... iphost` output.
    pub status_file: PathBuf,
    #[arg(long)]
    pub line_profile: String,
    #[arg(long)]
    pub service_profile: String,
    #[arg(long)]
    pub vlan: String,
    /// Also write the snippet to a timestamped export file.
    #[arg(long)]
    pub export: bool,
}

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Config dump to migrate against.
    pub dump: PathBuf,
    /// File with one serial per line; blank lines are ignored.
    #[arg(long)]
    pub serials_file: Option<PathBuf>,
    /// Serial given directly; repeatable, appended after --serials-file.
    #[arg(long)]
    pub serial: Vec<String>,
    /// Password for synthesized credential lines. Defaults to today's date.
    #[arg(long)]
    pub password: Option<String>,
    /// Profile family token of the versioned naming convention.
    #[arg(long, default_value = "NEWAP")]
    pub family: String,
    /// Profile suffix token of the versioned naming convention.
    #[arg(long, default_value = "ACS")]
    pub suffix: String,
    /// Optional checklists directory (expects before.toml, after.toml).
    #[arg(long)]
    pub checklists_dir: Option<PathBuf>,
    /// JSON file holding the last-good block per serial.
    #[arg(long)]
    pub cache_file: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Write the output document to this path instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Write the output document to a timestamped export file.
    #[arg(long, conflicts_with = "output")]
    pub export: bool,
    /// Show data source metadata.
    #[arg(long)]
    pub verbose: bool,
}

#[derive(Parser, Debug)]
pub struct CompareArgs {
    /// Config dump taken before the migration.
    pub before: PathBuf,
    /// Config dump taken after the migration.
    pub after: PathBuf,
    /// File with one serial per line; blank lines are ignored.
    #[arg(long)]
    pub serials_file: Option<PathBuf>,
    /// Serial given directly; repeatable, appended after --serials-file.
    #[arg(long)]
    pub serial: Vec<String>,
    /// Optional checklists directory (expects before.toml, after.toml).
    #[arg(long)]
    pub checklists_dir: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Show data source metadata.
    #[arg(long)]
    pub verbose: bool,
}

#[derive(Parser, Debug)]
pub struct LocateArgs {
    /// Config dump to search.
    pub dump: PathBuf,
    /// ONT serial number.
    pub serial: String,
    /// Profile family token of the versioned naming convention.
    #[arg(long, default_value = "NEWAP")]
    pub family: String,
    /// Profile suffix token of the versioned naming convention.
    #[arg(long, default_value = "ACS")]
    pub suffix: String,
    /// Optional checklists directory (expects before.toml, after.toml).
    #[arg(long)]
    pub checklists_dir: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
