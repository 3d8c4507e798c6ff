use crate::utils::parse_provider_list;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowArg {
    /// Last 12 months
    #[value(name = "1y")]
    OneYear,
    /// Last 24 months
    #[value(name = "2y")]
    TwoYears,
    /// Last 36 months
    #[value(name = "3y")]
    ThreeYears,
    /// Whole timeline, panning disabled
    All,
}

impl WindowArg {
    /// Window width in months; 0 means unbounded.
    pub fn width_months(self) -> u32 {
        match self {
            WindowArg::OneYear => 12,
            WindowArg::TwoYears => 24,
            WindowArg::ThreeYears => 36,
            WindowArg::All => 0,
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateArg {
    Month,
    Quarter,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtilityArg {
    Electricity,
    Gas,
    Water,
}

impl UtilityArg {
    pub fn as_str(self) -> &'static str {
        match self {
            UtilityArg::Electricity => "electricity",
            UtilityArg::Gas => "gas",
            UtilityArg::Water => "water",
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewArg {
    /// Monthly/quarterly cost timeline
    Costs,
    /// Per-invoice consumption detail table
    Consumption,
    /// Imported document listing with due dates and payment status
    Documents,
}

#[derive(clap::Parser, Debug)]
#[command(name = "rachunki", about = "Utility-bill cost dashboard for the terminal")]
pub struct Args {
    /// Path to the bills database. Defaults to RACHUNKI_DB_PATH or ~/.rachunki/rachunki.db
    #[arg(long)]
    pub db: Option<String>,

    /// Base URL of the rachunki backend (e.g. http://localhost:8000)
    #[arg(long, env = "RACHUNKI_API_URL")]
    pub url: Option<String>,

    /// JSON snapshot of billing records ("-" reads stdin). Overrides --url and --db
    #[arg(long)]
    pub file: Option<String>,

    /// Restrict to one utility type
    #[arg(long, value_enum)]
    pub utility_type: Option<UtilityArg>,

    /// Restrict to locations containing this substring
    #[arg(long)]
    pub location: Option<String>,

    /// Restrict to a single provider key (e.g. eon)
    #[arg(long)]
    pub provider: Option<String>,

    /// Visible window preset
    #[arg(long, value_enum, default_value_t = WindowArg::OneYear)]
    pub window: WindowArg,

    /// Pages to step back toward older data (half-window stride per page)
    #[arg(long, default_value_t = 0)]
    pub page: u32,

    /// Explicit pan offset in months (overrides --page)
    #[arg(long)]
    pub offset_months: Option<u32>,

    /// Timeline granularity
    #[arg(long, value_enum, default_value_t = AggregateArg::Month)]
    pub aggregate: AggregateArg,

    /// Provider columns for the cost table, comma-separated
    #[arg(long, env = "RACHUNKI_PROVIDERS", default_value = "eon,pgnig,mpwik")]
    pub providers: String,

    /// Table to render
    #[arg(long, value_enum, default_value_t = ViewArg::Costs)]
    pub view: ViewArg,

    /// Include estimated (prognoza) records in the consumption view
    #[arg(long)]
    pub include_estimates: bool,

    /// Emit JSON instead of a formatted table
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn parse() -> Self {
        <Args as clap::Parser>::parse()
    }

    /// Tracked provider set for projection, in column order.
    pub fn tracked_providers(&self) -> Vec<String> {
        let providers = parse_provider_list(&self.providers);
        if providers.is_empty() {
            crate::utils::DEFAULT_TRACKED_PROVIDERS
                .iter()
                .map(|p| p.to_string())
                .collect()
        } else {
            providers
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_widths() {
        assert_eq!(WindowArg::OneYear.width_months(), 12);
        assert_eq!(WindowArg::TwoYears.width_months(), 24);
        assert_eq!(WindowArg::ThreeYears.width_months(), 36);
        assert_eq!(WindowArg::All.width_months(), 0);
    }

    #[test]
    fn test_tracked_providers_fallback() {
        let mut args = <Args as clap::Parser>::try_parse_from(["rachunki"]).unwrap();
        assert_eq!(args.tracked_providers(), vec!["eon", "pgnig", "mpwik"]);
        args.providers = " , ".to_string();
        assert_eq!(args.tracked_providers(), vec!["eon", "pgnig", "mpwik"]);
        args.providers = "tauron,eon".to_string();
        assert_eq!(args.tracked_providers(), vec!["tauron", "eon"]);
    }
}
