/// The configuration parameters for the application.
#[derive(clap::Parser, Clone)]
pub struct Config {
    /// The directory holding one JSON document per funnel.
    #[clap(long, env, default_value = "funnels")]
    pub funnels_dir: String,

    /// The directory served under /assets (page script, styles, images).
    #[clap(long, env, default_value = "src/assets")]
    pub assets_dir: String,

    /// The PORT number for the server address.
    #[clap(long, env, default_value = "8080")]
    pub port: u16,
}
