//! Process-wide resolvers decoded on first use.
//!
//! These return the same data as the per-call constructors. A failed decode
//! is not cached, so a later call tries again.

use once_cell::sync::OnceCell;

use crate::error::DecodeError;
use crate::resolver::{CodeCountryMap, CodeResolver, TimezoneCodeMap, TimezoneCountryMap};

static TIMEZONE_CODES: OnceCell<TimezoneCodeMap> = OnceCell::new();
static CODE_COUNTRIES: OnceCell<CodeCountryMap> = OnceCell::new();
static TIMEZONE_COUNTRIES: OnceCell<TimezoneCountryMap> = OnceCell::new();
static CODE_RESOLVER: OnceCell<CodeResolver> = OnceCell::new();

/// Shared timezone to code table.
pub fn timezone_code_map() -> Result<&'static TimezoneCodeMap, DecodeError> {
    TIMEZONE_CODES.get_or_try_init(TimezoneCodeMap::new)
}

/// Shared code to country table.
pub fn code_country_map() -> Result<&'static CodeCountryMap, DecodeError> {
    CODE_COUNTRIES.get_or_try_init(CodeCountryMap::new)
}

/// Shared timezone to country table.
pub fn timezone_country_map() -> Result<&'static TimezoneCountryMap, DecodeError> {
    TIMEZONE_COUNTRIES.get_or_try_init(TimezoneCountryMap::new)
}

/// Shared two-step resolver.
pub fn code_resolver() -> Result<&'static CodeResolver, DecodeError> {
    CODE_RESOLVER.get_or_try_init(CodeResolver::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_instance_is_reused() {
        let first = timezone_code_map().unwrap();
        let second = timezone_code_map().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_shared_matches_fresh_construction() {
        assert_eq!(timezone_code_map().unwrap(), &TimezoneCodeMap::new().unwrap());
        assert_eq!(code_country_map().unwrap(), &CodeCountryMap::new().unwrap());
        assert_eq!(timezone_country_map().unwrap(), &TimezoneCountryMap::new().unwrap());
        assert_eq!(code_resolver().unwrap(), &CodeResolver::new().unwrap());
    }

    #[test]
    fn test_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    let map = timezone_country_map().unwrap();
                    map.get_country("Asia/Tokyo").unwrap().to_string()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "Japan");
        }
    }
}
