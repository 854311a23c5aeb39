use anyhow::Result;
use std::ffi::OsString;
use std::path::PathBuf;

pub const DEFAULT_WIDTH: f32 = 1280.0;
pub const DEFAULT_HEIGHT: f32 = 800.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    pub data: PathBuf,
    pub query: Option<String>,
    /// 1-based, as shown in the candidate list.
    pub pick: Option<usize>,
    pub width: f32,
    pub height: f32,
}

pub fn parse_args() -> Result<CliConfig> {
    parse_args_from(std::env::args_os().skip(1))
}

fn parse_args_from<I>(args: I) -> Result<CliConfig>
where
    I: IntoIterator<Item = OsString>,
{
    let mut data = None;
    let mut query = None;
    let mut pick = None;
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        if arg == "--data" {
            let Some(path) = args.next() else {
                anyhow::bail!("--data expects a path");
            };
            data = Some(PathBuf::from(path));
        } else if arg == "--search" {
            let Some(value) = args.next() else {
                anyhow::bail!("--search expects a name");
            };
            query = Some(value.to_string_lossy().to_string());
        } else if arg == "--pick" {
            let Some(value) = args.next() else {
                anyhow::bail!("--pick expects a number");
            };
            let value = value.to_string_lossy();
            let n: usize = value
                .parse()
                .map_err(|_| anyhow::anyhow!("invalid --pick: {value} (expected 1, 2, ...)"))?;
            pick = Some(n);
        } else if arg == "--width" {
            width = parse_dimension("--width", args.next())?;
        } else if arg == "--height" {
            height = parse_dimension("--height", args.next())?;
        } else {
            anyhow::bail!("unknown argument: {:?}", arg);
        }
    }

    let Some(data) = data else {
        anyhow::bail!("--data is required");
    };

    Ok(CliConfig {
        data,
        query,
        pick,
        width,
        height,
    })
}

fn parse_dimension(flag: &str, value: Option<OsString>) -> Result<f32> {
    let Some(value) = value else {
        anyhow::bail!("{flag} expects a number of pixels");
    };
    let value = value.to_string_lossy();
    match value.parse::<f32>() {
        Ok(v) if v > 0.0 => Ok(v),
        _ => anyhow::bail!("invalid {flag}: {value}"),
    }
}

/// Turn a 1-based pick into the 0-based candidate index.
pub fn pick_index(pick: Option<usize>) -> Option<usize> {
    pick.and_then(|n| n.checked_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn parses_search_and_pick() {
        let config = parse_args_from(args(&[
            "--data", "family.json", "--search", "Sam", "--pick", "2",
        ]))
        .expect("config parsed");
        assert_eq!(config.data, PathBuf::from("family.json"));
        assert_eq!(config.query.as_deref(), Some("Sam"));
        assert_eq!(config.pick, Some(2));
        assert_eq!(config.width, DEFAULT_WIDTH);
    }

    #[test]
    fn data_is_required() {
        assert!(parse_args_from(args(&["--search", "Sam"])).is_err());
    }

    #[test]
    fn rejects_bad_numbers_and_unknown_flags() {
        assert!(parse_args_from(args(&["--data", "f", "--pick", "two"])).is_err());
        assert!(parse_args_from(args(&["--data", "f", "--width", "-3"])).is_err());
        assert!(parse_args_from(args(&["--data", "f", "--verbose"])).is_err());
    }

    #[test]
    fn pick_zero_selects_nothing() {
        assert_eq!(pick_index(Some(1)), Some(0));
        assert_eq!(pick_index(Some(0)), None);
        assert_eq!(pick_index(None), None);
    }
}
