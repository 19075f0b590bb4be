use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "communityhub",
    version,
    about = "Terminal client for the CommunityHub community platform"
)]
pub struct Args {
    /// Jump straight into a service by id (e.g. "accommodations")
    #[arg(short, long)]
    pub service: Option<String>,

    /// Override the configured theme for this session
    #[arg(short, long)]
    pub theme: Option<String>,
}
