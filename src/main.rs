use anyhow::Result;
use clap::{Parser, Subcommand};

use shopbooks::cli::{
    handle_cost_command, handle_ingredient_command, handle_report_command,
    handle_revenue_command, resolve_owner, CostCommands, IngredientCommands, ReportCommands,
    RevenueCommands, OWNER_ENV,
};
use shopbooks::config::{ShopbooksPaths, Settings};
use shopbooks::storage::Storage;

#[derive(Parser)]
#[command(
    name = "shopbooks",
    version,
    about = "Ingredient cost and sales bookkeeping for small food shops",
    long_about = "shopbooks records ingredient purchases and sales, shows monthly \
                  totals with VAT and profit, and exports the report as an Excel \
                  workbook."
)]
struct Cli {
    /// Owner whose records are used
    #[arg(long, global = true, env = OWNER_ENV)]
    owner: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingredient purchase commands
    #[command(subcommand)]
    Cost(CostCommands),

    /// Sales commands
    #[command(subcommand)]
    Revenue(RevenueCommands),

    /// Ingredient catalog and product costing
    #[command(subcommand)]
    Ingredient(IngredientCommands),

    /// Monthly summary and Excel export
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show recent changes from the audit log
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let paths = ShopbooksPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Cost(cmd)) => {
            let owner = resolve_owner(cli.owner.as_deref(), &settings)?;
            handle_cost_command(&storage, &owner, &settings, cmd)?;
        }
        Some(Commands::Revenue(cmd)) => {
            let owner = resolve_owner(cli.owner.as_deref(), &settings)?;
            handle_revenue_command(&storage, &owner, &settings, cmd)?;
        }
        Some(Commands::Ingredient(cmd)) => {
            let owner = resolve_owner(cli.owner.as_deref(), &settings)?;
            handle_ingredient_command(&storage, &owner, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            let owner = resolve_owner(cli.owner.as_deref(), &settings)?;
            handle_report_command(&storage, &owner, &settings, cmd)?;
        }
        Some(Commands::Audit { limit }) => {
            let owner = resolve_owner(cli.owner.as_deref(), &settings)?;
            let entries = storage
                .audit_logger()
                .read_recent(owner.owner_id().as_str(), limit)?;
            if entries.is_empty() {
                println!("No changes recorded.");
            }
            for entry in &entries {
                println!("{}", entry.format_human_readable());
            }
        }
        Some(Commands::Init) => {
            let mut settings = settings;
            if let Some(owner) = cli.owner.as_deref() {
                settings.default_owner = Some(owner.trim().to_string());
            }
            settings.save(&paths)?;
            storage.save_all()?;
            println!("Initialized shopbooks at: {}", paths.base_dir().display());
            if let Some(owner) = &settings.default_owner {
                println!("Default owner: {}", owner);
            }
        }
        Some(Commands::Config) => {
            println!("shopbooks Configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  VAT rate:        {}", settings.vat_rate);
            println!("  Currency suffix: {:?}", settings.currency_suffix);
            println!("  Date format:     {}", settings.date_format);
            println!("  Report file:     {}", settings.report_filename);
            println!(
                "  Default owner:   {}",
                settings.default_owner.as_deref().unwrap_or("(none)")
            );
        }
        None => {
            println!("shopbooks - cost and revenue bookkeeping");
            println!();
            println!("Run 'shopbooks --help' for usage information.");
        }
    }

    Ok(())
}
