//! Command line options for `stl2blocks`.

use std::path::PathBuf;

use clap::Parser;
use config::constants::{DEFAULT_SCREEN_NAME, DEFAULT_SCREEN_PAGE};
use config::conversion::{parse_vector3, ConfigError, ConversionConfig};

/// Parse a 3D printer file in ASCII or binary STL format and render it into
/// a Minecraft server console running inside GNU screen.
#[derive(Parser, Debug, Clone)]
#[command(name = "stl2blocks")]
#[command(version)]
pub struct Cli {
    /// STL file to render
    #[arg(short = 'f', long, value_name = "FILENAME")]
    pub file: PathBuf,

    /// Grid position of the model origin
    #[arg(short = 'o', long, value_name = "X,Y,Z", default_value = "0,0,0", value_parser = parse_vector3)]
    pub origin: [f64; 3],

    /// Grid vector for one STL unit along x
    #[arg(short = 'x', long, alias = "x_unit", value_name = "X,Y,Z", default_value = "1,0,0", value_parser = parse_vector3)]
    pub x_unit: [f64; 3],

    /// Grid vector for one STL unit along y
    #[arg(short = 'y', long, alias = "y_unit", value_name = "X,Y,Z", default_value = "0,0,1", value_parser = parse_vector3)]
    pub y_unit: [f64; 3],

    /// Grid vector for one STL unit along z
    #[arg(short = 'z', long, alias = "z_unit", value_name = "X,Y,Z", default_value = "0,1,0", value_parser = parse_vector3)]
    pub z_unit: [f64; 3],

    /// Minecraft block id to place (eg: redstone_block)
    #[arg(short = 'b', long, alias = "block_type", value_name = "BLOCK_ID")]
    pub block_type: String,

    /// Name of the screen session running the server
    #[arg(short = 's', long, value_name = "SCREEN_NAME", default_value = DEFAULT_SCREEN_NAME)]
    pub screen: String,

    /// Screen window running the server
    #[arg(short = 'p', long, value_name = "SCREEN_PAGE", default_value = DEFAULT_SCREEN_PAGE)]
    pub page: String,

    /// Log every console command and raise the log level
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Actually send the commands to the console
    #[arg(short = 'c', long)]
    pub commit: bool,

    /// Voxelize triangles on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Print the run summary as JSON on stdout
    #[arg(long)]
    pub summary_json: bool,
}

impl Cli {
    /// Builds the validated conversion settings.
    pub fn conversion_config(&self) -> Result<ConversionConfig, ConfigError> {
        Ok(
            ConversionConfig::new(self.origin, self.x_unit, self.y_unit, self.z_unit)?
                .with_parallel(self.parallel),
        )
    }
}
