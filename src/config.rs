use crate::color::{BLACK, Rgb};
use crate::effects::EffectKind;
use crate::error::ConfigError;
use crate::simulator::{EffectChoice, SimConfig};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub effect: EffectChoice,
    pub bg_color: Rgb,
    pub spawn_chance: f64,
    pub fade_alpha: f64,
    /// Simulation units per terminal pixel.
    pub scale: f64,
    pub sound: bool,
}

impl Default for Config {
    fn default() -> Self {
        let sim = SimConfig::default();
        Self {
            effect: sim.effect,
            bg_color: BLACK,
            spawn_chance: sim.spawn_chance,
            fade_alpha: sim.fade_alpha,
            scale: 4.0,
            sound: false,
        }
    }
}

impl Config {
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            spawn_chance: self.spawn_chance,
            fade_alpha: self.fade_alpha,
            fade_color: self.bg_color,
            effect: self.effect,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(Config),
    Help,
}

pub fn usage() -> String {
    [
        "skyburst - fireworks in the terminal",
        "",
        "Usage: skyburst [OPTIONS]",
        "",
        "Options:",
        "  --effect KIND       Burst style: mixed (default), rect or ellipse",
        "  --bg-color RRGGBB   Background color as hex (e.g., --bg-color 1a1b26)",
        "  --spawn-chance P    Launch probability per frame, 0-1 (default 0.03)",
        "  --fade A            Trail fade opacity per frame, 0-1 (default 0.1)",
        "  --scale S           Simulation units per terminal pixel (default 4)",
        "  --sound             Ring the terminal bell on launches and bursts",
        "  -h, --help          Show this help",
        "",
        "Keys: 's' toggles sound; 'q', ESC or Ctrl+C exits",
    ]
    .join("\n")
}

pub fn parse_hex_color(hex: &str) -> Option<Rgb> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}

fn parse_effect(name: &str) -> Result<EffectChoice, ConfigError> {
    match name {
        "mixed" => Ok(EffectChoice::Mixed),
        "rect" | "rectangle" => Ok(EffectChoice::Only(EffectKind::Rectangle)),
        "ellipse" => Ok(EffectChoice::Only(EffectKind::Ellipse)),
        other => Err(ConfigError::UnknownEffect(other.to_string())),
    }
}

fn parse_number(option: &'static str, value: &str) -> Result<f64, ConfigError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConfigError::InvalidNumber {
            option,
            value: value.to_string(),
        })
}

fn parse_fraction(option: &'static str, value: &str) -> Result<f64, ConfigError> {
    let v = parse_number(option, value)?;
    if (0.0..=1.0).contains(&v) {
        Ok(v)
    } else {
        Err(ConfigError::OutOfRange {
            option,
            expected: "between 0 and 1",
            value: v,
        })
    }
}

/// Parses arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> Result<Command, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<S> = args.into_iter().collect();
    let mut config = Config::default();

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_ref();
        let value = |option: &'static str| {
            args.get(i + 1)
                .map(|v| v.as_ref())
                .ok_or(ConfigError::MissingValue(option))
        };

        match arg {
            "--effect" => {
                config.effect = parse_effect(value("--effect")?)?;
                i += 2;
            }
            "--bg-color" => {
                let hex = value("--bg-color")?;
                config.bg_color =
                    parse_hex_color(hex).ok_or_else(|| ConfigError::InvalidColor(hex.to_string()))?;
                i += 2;
            }
            "--spawn-chance" => {
                config.spawn_chance = parse_fraction("--spawn-chance", value("--spawn-chance")?)?;
                i += 2;
            }
            "--fade" => {
                config.fade_alpha = parse_fraction("--fade", value("--fade")?)?;
                i += 2;
            }
            "--scale" => {
                let scale = parse_number("--scale", value("--scale")?)?;
                if scale <= 0.0 {
                    return Err(ConfigError::OutOfRange {
                        option: "--scale",
                        expected: "greater than 0",
                        value: scale,
                    });
                }
                config.scale = scale;
                i += 2;
            }
            "--sound" => {
                config.sound = true;
                i += 1;
            }
            "help" | "--help" | "-h" => return Ok(Command::Help),
            other => return Err(ConfigError::UnknownOption(other.to_string())),
        }
    }

    Ok(Command::Run(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Config {
        match parse_args(args) {
            Ok(Command::Run(config)) => config,
            other => panic!("expected run config, got {other:?}"),
        }
    }

    #[test]
    fn defaults() {
        let config = run(&[]);
        assert_eq!(config, Config::default());
        assert_eq!(config.sim_config(), SimConfig::default());
    }

    #[test]
    fn all_options() {
        let config = run(&[
            "--effect",
            "ellipse",
            "--bg-color",
            "#1a1b26",
            "--spawn-chance",
            "0.02",
            "--fade",
            "0.25",
            "--scale",
            "2.5",
            "--sound",
        ]);
        assert_eq!(config.effect, EffectChoice::Only(EffectKind::Ellipse));
        assert_eq!(config.bg_color, (0x1a, 0x1b, 0x26));
        assert_eq!(config.spawn_chance, 0.02);
        assert_eq!(config.fade_alpha, 0.25);
        assert_eq!(config.scale, 2.5);
        assert!(config.sound);
        assert_eq!(config.sim_config().fade_color, (0x1a, 0x1b, 0x26));
    }

    #[test]
    fn help() {
        assert_eq!(parse_args(["--help"]), Ok(Command::Help));
        assert_eq!(parse_args(["--sound", "-h"]), Ok(Command::Help));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            parse_args(["--bg-color", "zzzzzz"]),
            Err(ConfigError::InvalidColor("zzzzzz".into()))
        );
        assert_eq!(
            parse_args(["--bg-color"]),
            Err(ConfigError::MissingValue("--bg-color"))
        );
        assert_eq!(
            parse_args(["--effect", "spiral"]),
            Err(ConfigError::UnknownEffect("spiral".into()))
        );
        assert_eq!(
            parse_args(["--verbose"]),
            Err(ConfigError::UnknownOption("--verbose".into()))
        );
        assert!(matches!(
            parse_args(["--fade", "1.5"]),
            Err(ConfigError::OutOfRange { option: "--fade", .. })
        ));
        assert!(matches!(
            parse_args(["--scale", "0"]),
            Err(ConfigError::OutOfRange { option: "--scale", .. })
        ));
        assert!(matches!(
            parse_args(["--spawn-chance", "often"]),
            Err(ConfigError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn hex_colors() {
        assert_eq!(parse_hex_color("ff8000"), Some((255, 128, 0)));
        assert_eq!(parse_hex_color("#000000"), Some(BLACK));
        assert_eq!(parse_hex_color("fff"), None);
        assert_eq!(parse_hex_color("ééé"), None);
    }
}
