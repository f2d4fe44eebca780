//! Parquet compression codec selector

use std::str::FromStr;

use crate::config::error::ConfigError;

/// Codec named by `PARQUET_COMPRESSION`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParquetCompression {
    #[default]
    Snappy,
    Gzip,
    Brotli,
}

impl ParquetCompression {
    pub const ALL: [ParquetCompression; 3] = [
        ParquetCompression::Snappy,
        ParquetCompression::Gzip,
        ParquetCompression::Brotli,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ParquetCompression::Snappy => "snappy",
            ParquetCompression::Gzip => "gzip",
            ParquetCompression::Brotli => "brotli",
        }
    }
}

impl FromStr for ParquetCompression {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParquetCompression::ALL
            .into_iter()
            .find(|codec| codec.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                ConfigError::unsupported("PARQUET_COMPRESSION", s, "snappy, gzip, brotli")
            })
    }
}

impl std::fmt::Display for ParquetCompression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compression_from_str() {
        assert_eq!("snappy".parse::<ParquetCompression>().unwrap(), ParquetCompression::Snappy);
        assert_eq!("GZIP".parse::<ParquetCompression>().unwrap(), ParquetCompression::Gzip);
        assert_eq!("Brotli".parse::<ParquetCompression>().unwrap(), ParquetCompression::Brotli);
    }

    #[test]
    fn test_compression_invalid() {
        let err = "zstd".parse::<ParquetCompression>().unwrap_err();
        assert_eq!(err.field(), Some("PARQUET_COMPRESSION"));
    }

    #[test]
    fn test_compression_display_matches_parse() {
        for codec in ParquetCompression::ALL {
            assert_eq!(codec.to_string().parse::<ParquetCompression>().unwrap(), codec);
        }
    }
}
