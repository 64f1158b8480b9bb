use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use anyhow::{Context, bail};
    use clap::{Parser, Subcommand};
    use rotations::{Degrees, Quaternion, Radians, Rotation, Vector3D};

    #[derive(Debug, Parser)]
    #[command(about = "Rotate vectors and evaluate quaternion functions", long_about = None)]
    struct Cli {
        /// Number of decimals to print
        #[arg(short, long, default_value_t = 2, global = true)]
        precision: usize,

        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Rotate a vector by an angle about an axis
        Rotate {
            /// Rotation axis as comma-separated components `X,Y,Z`
            #[arg(short, long, value_parser = parse_vector, allow_hyphen_values = true)]
            axis: Vector3D,
            /// Rotation angle (in radians unless `--degrees` is given)
            #[arg(long, allow_hyphen_values = true)]
            angle: f64,
            /// Interpret the angle as degrees
            #[arg(short, long)]
            degrees: bool,
            /// Vector to rotate as comma-separated components `X,Y,Z`
            #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
            vector: Vector3D,
        },
        /// Spherically interpolate between two quaternions
        Slerp {
            /// Quaternion at `t = 0` as comma-separated components `R,I,J,K`
            #[arg(long, value_parser = parse_quaternion, allow_hyphen_values = true)]
            from: Quaternion,
            /// Quaternion at `t = 1` as comma-separated components `R,I,J,K`
            #[arg(long, value_parser = parse_quaternion, allow_hyphen_values = true)]
            to: Quaternion,
            /// Interpolation parameter
            #[arg(short, long, allow_hyphen_values = true)]
            t: f64,
        },
        /// Compute the exponential of a quaternion
        Exp {
            /// Quaternion as comma-separated components `R,I,J,K`
            #[arg(value_parser = parse_quaternion, allow_hyphen_values = true)]
            quaternion: Quaternion,
        },
        /// Compute the natural logarithm of a quaternion
        Ln {
            /// Quaternion as comma-separated components `R,I,J,K`
            #[arg(value_parser = parse_quaternion, allow_hyphen_values = true)]
            quaternion: Quaternion,
        },
        /// Raise a quaternion to a real power
        Pow {
            /// Quaternion as comma-separated components `R,I,J,K`
            #[arg(value_parser = parse_quaternion, allow_hyphen_values = true)]
            quaternion: Quaternion,
            /// Real exponent
            #[arg(short, long, allow_hyphen_values = true)]
            exponent: f64,
        },
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();
        let precision = cli.precision;

        match cli.command {
            Command::Rotate {
                axis,
                angle,
                degrees,
                vector,
            } => {
                let rotation = if degrees {
                    Rotation::try_from_axis_angle(&axis, Degrees(angle))
                } else {
                    Rotation::try_from_axis_angle(&axis, Radians(angle))
                }
                .context("Invalid rotation axis")?;

                log::debug!("Rotating {vector} with {rotation}");
                println!("{:.*}", precision, rotation.rotate(&vector));
            }
            Command::Slerp { from, to, t } => {
                println!("{:.*}", precision, Quaternion::slerp(&from, &to, t));
            }
            Command::Exp { quaternion } => {
                println!("{:.*}", precision, quaternion.exp());
            }
            Command::Ln { quaternion } => {
                println!("{:.*}", precision, quaternion.try_ln()?);
            }
            Command::Pow {
                quaternion,
                exponent,
            } => {
                println!("{:.*}", precision, quaternion.try_pow(exponent)?);
            }
        }

        Ok(())
    }

    fn parse_components<const N: usize>(text: &str) -> Result<[f64; N]> {
        let components = text
            .split(',')
            .map(|component| {
                component
                    .trim()
                    .parse::<f64>()
                    .with_context(|| format!("Invalid component `{component}`"))
            })
            .collect::<Result<Vec<_>>>()?;

        if components.len() != N {
            bail!("Expected {} components, got {}", N, components.len());
        }
        Ok(std::array::from_fn(|idx| components[idx]))
    }

    fn parse_vector(text: &str) -> Result<Vector3D> {
        parse_components::<3>(text).map(Vector3D::from_array)
    }

    fn parse_quaternion(text: &str) -> Result<Quaternion> {
        let [r, i, j, k] = parse_components::<4>(text)?;
        Ok(Quaternion::new(r, i, j, k))
    }

}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
