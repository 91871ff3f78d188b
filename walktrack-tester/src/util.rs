use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("seed `{0}` is not an unsigned integer")]
    NotANumber(String),
    #[error("no seeds given")]
    Empty,
}

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Parse a comma-separated seed list. Hex seeds take a `0x` prefix.
pub fn parse_seeds(s: &str) -> Result<Vec<u64>, SeedError> {
    let seeds = split_csv(s)
        .into_iter()
        .map(|token| {
            let parsed = token
                .strip_prefix("0x")
                .map_or_else(|| token.parse(), |hex| u64::from_str_radix(hex, 16));
            parsed.map_err(|_| SeedError::NotANumber(token))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if seeds.is_empty() {
        return Err(SeedError::Empty);
    }
    Ok(seeds)
}
