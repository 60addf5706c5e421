use std::num::NonZeroU32;

const DEFAULT_PER_PAGE: NonZeroU32 = match NonZeroU32::new(10) {
    Some(n) => n,
    None => unreachable!(),
};

/// Number of posts shown on each listing page.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PageSize(NonZeroU32);

impl PageSize {
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(DEFAULT_PER_PAGE)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_is_ten() {
        assert_eq!(PageSize::default().get(), 10);
    }

    #[test]
    fn zero_is_rejected() {
        let parsed: Result<PageSize, _> = serde_yaml::from_str("0");
        assert!(parsed.is_err());
    }

    #[test]
    fn positive_is_kept() {
        let parsed: PageSize = serde_yaml::from_str("3").unwrap();
        assert_eq!(parsed.get(), 3);
    }
}
