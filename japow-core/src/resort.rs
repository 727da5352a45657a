//! Built-in catalogue of Japanese ski resorts and region filtering.
//!
//! # Examples
//! ```
//! use japow_core::{Region, RegionFilter, find_resort};
//!
//! let niseko = find_resort("niseko").expect("niseko is catalogued");
//! assert_eq!(niseko.region, Region::Hokkaido);
//! assert!(RegionFilter::Only(Region::Hokkaido).matches(niseko));
//! assert!(!RegionFilter::Only(Region::Nagano).matches(niseko));
//! ```

/// Prefecture-level region a resort belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Region {
    /// Hokkaido.
    Hokkaido,
    /// Nagano.
    Nagano,
    /// Niigata.
    Niigata,
    /// Gunma.
    Gunma,
    /// Yamagata.
    Yamagata,
    /// Iwate.
    Iwate,
    /// Akita.
    Akita,
    /// Gifu.
    Gifu,
}

impl Region {
    /// Every region, in catalogue order.
    pub const ALL: [Self; 8] = [
        Self::Hokkaido,
        Self::Nagano,
        Self::Niigata,
        Self::Gunma,
        Self::Yamagata,
        Self::Iwate,
        Self::Akita,
        Self::Gifu,
    ];

    /// Return the region name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hokkaido => "Hokkaido",
            Self::Nagano => "Nagano",
            Self::Niigata => "Niigata",
            Self::Gunma => "Gunma",
            Self::Yamagata => "Yamagata",
            Self::Iwate => "Iwate",
            Self::Akita => "Akita",
            Self::Gifu => "Gifu",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|region| region.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown region '{s}'"))
    }
}

/// A ski resort known to the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Resort {
    /// Stable identifier used to key forecasts.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Region the resort belongs to.
    pub region: Region,
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
    /// Live camera page, when the resort publishes one.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub webcam_url: Option<&'static str>,
}

const fn resort(
    id: &'static str,
    name: &'static str,
    region: Region,
    coordinates: (f64, f64),
    webcam_url: Option<&'static str>,
) -> Resort {
    Resort {
        id,
        name,
        region,
        latitude: coordinates.0,
        longitude: coordinates.1,
        webcam_url,
    }
}

const CATALOGUE: &[Resort] = &[
    resort(
        "niseko",
        "Niseko United",
        Region::Hokkaido,
        (42.8048, 140.6874),
        Some("https://www.niseko.ne.jp/en/niseko-webcams/"),
    ),
    resort(
        "rusutsu",
        "Rusutsu Resort",
        Region::Hokkaido,
        (42.7495, 140.9022),
        Some("https://rusutsu.com/en/live-cameras/"),
    ),
    resort(
        "furano",
        "Furano Ski Resort",
        Region::Hokkaido,
        (43.3444, 142.3835),
        Some("https://www.snow-forecast.com/resorts/Furano/webcams/latest"),
    ),
    resort(
        "kiroro",
        "Kiroro Resort",
        Region::Hokkaido,
        (43.0833, 140.9833),
        Some("https://www.kiroro.co.jp/live-camera/"),
    ),
    resort(
        "tomamu",
        "Tomamu Resort",
        Region::Hokkaido,
        (43.0667, 142.6167),
        Some("https://www.snow-forecast.com/resorts/Tomamu/webcams/latest"),
    ),
    resort(
        "sahoro",
        "Sahoro Resort",
        Region::Hokkaido,
        (43.2333, 142.8667),
        Some("https://sahoro-resort.com/livecam/"),
    ),
    resort(
        "kokusai",
        "Sapporo Kokusai",
        Region::Hokkaido,
        (42.9167, 141.1833),
        Some("https://snowstash.com/japan/hokkaido/sapporo-kokusai/webcams"),
    ),
    resort(
        "teine",
        "Sapporo Teine",
        Region::Hokkaido,
        (43.1167, 141.1833),
        Some("https://sapporo-teine.com/snow/lang/en/livecam.html"),
    ),
    resort(
        "asahidake",
        "Asahidake",
        Region::Hokkaido,
        (43.6633, 142.8533),
        Some("https://asahidake.hokkaido.jp/en/live-camera/"),
    ),
    resort(
        "hakuba",
        "Hakuba Valley",
        Region::Nagano,
        (36.7022, 137.8524),
        Some("https://www.hakuba.com/webcams"),
    ),
    resort(
        "nozawa",
        "Nozawa Onsen",
        Region::Nagano,
        (36.9232, 138.4418),
        Some("https://nozawaski.com/en/webcams/"),
    ),
    resort(
        "shiga-kogen",
        "Shiga Kogen",
        Region::Nagano,
        (36.7444, 138.5167),
        Some("https://www.shigakogen.gr.jp/english/livecam.html"),
    ),
    resort(
        "madarao",
        "Madarao Kogen",
        Region::Nagano,
        (36.8833, 138.3167),
        Some("https://www.madaraokogen.com/en/webcam/"),
    ),
    resort(
        "tangram",
        "Tangram Ski Circus",
        Region::Nagano,
        (36.7667, 138.2833),
        Some("https://www.tangram.jp/eng/lift/"),
    ),
    resort(
        "myoko-kogen",
        "Myoko Kogen",
        Region::Niigata,
        (36.9167, 138.1667),
        Some("https://myokotourism.com/webcams/"),
    ),
    resort(
        "naeba",
        "Naeba",
        Region::Niigata,
        (36.8500, 138.8500),
        Some("https://www.princehotels.com/en/ski/naeba/webcam/"),
    ),
    resort(
        "gala-yuzawa",
        "GALA Yuzawa",
        Region::Niigata,
        (36.9333, 138.8167),
        Some("https://gala.co.jp/winter/english/livecam/"),
    ),
    resort(
        "kagura",
        "Kagura",
        Region::Niigata,
        (36.8333, 138.8333),
        Some("https://www.princehotels.co.jp/ski/kagura/livecam/"),
    ),
    resort(
        "ishiuchi-maruyama",
        "Ishiuchi Maruyama",
        Region::Niigata,
        (36.9167, 138.7833),
        Some("https://ishiuchi.or.jp/livecamera/"),
    ),
    resort("joetsu-kokusai", "Joetsu Kokusai", Region::Niigata, (36.9500, 138.5833), None),
    resort(
        "minakami",
        "Minakami",
        Region::Gunma,
        (36.7833, 138.9500),
        Some("https://www.enjoy-minakami.jp/livecamera"),
    ),
    resort(
        "tambara",
        "Tambara",
        Region::Gunma,
        (36.7333, 139.1167),
        Some("https://www.tambara.co.jp/winter/livecamera/"),
    ),
    resort(
        "zao",
        "Zao Onsen",
        Region::Yamagata,
        (38.1500, 140.4167),
        Some("https://www.zao-ski.or.jp/livecamera/"),
    ),
    resort(
        "appi-kogen",
        "Appi Kogen",
        Region::Iwate,
        (39.9500, 140.9500),
        Some("https://www.appi.co.jp/snow-mountain-resort/livecamera/"),
    ),
    resort(
        "geto-kogen",
        "Geto Kogen",
        Region::Iwate,
        (39.3333, 140.8333),
        Some("https://www.getokogen.com/winter/03gelende/livecam.html"),
    ),
    resort(
        "tazawako",
        "Tazawako",
        Region::Akita,
        (39.7833, 140.6833),
        Some("https://www.tazawako-ski.com/"),
    ),
    resort(
        "takasu",
        "Takasu Snow Park",
        Region::Gifu,
        (35.9167, 136.9167),
        Some("https://www.takasu.gr.jp/livecam/"),
    ),
    resort(
        "dynaland",
        "Dynaland",
        Region::Gifu,
        (35.9333, 136.9333),
        Some("https://www.dynaland.co.jp/livecam/"),
    ),
];

/// Return every catalogued resort, grouped by region.
#[must_use]
pub const fn catalogue() -> &'static [Resort] {
    CATALOGUE
}

/// Look up a resort by identifier.
#[must_use]
pub fn find_resort(id: &str) -> Option<&'static Resort> {
    CATALOGUE.iter().find(|resort| resort.id == id)
}

/// Restrict a listing to one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegionFilter {
    /// Keep every resort.
    #[default]
    All,
    /// Keep only resorts in the given region.
    Only(Region),
}

impl RegionFilter {
    /// Report whether `resort` passes the filter.
    #[must_use]
    pub fn matches(self, resort: &Resort) -> bool {
        match self {
            Self::All => true,
            Self::Only(region) => resort.region == region,
        }
    }

    /// Report whether the resort with `resort_id` passes the filter.
    ///
    /// Identifiers missing from the catalogue only pass [`RegionFilter::All`].
    #[must_use]
    pub fn matches_id(self, resort_id: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(_) => find_resort(resort_id).is_some_and(|resort| self.matches(resort)),
        }
    }

    /// Iterate over the catalogued resorts passing the filter.
    pub fn resorts(self) -> impl Iterator<Item = &'static Resort> {
        CATALOGUE.iter().filter(move |resort| self.matches(resort))
    }
}

impl std::str::FromStr for RegionFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    fn catalogue_ids_are_unique() {
        let ids: HashSet<&str> = catalogue().iter().map(|resort| resort.id).collect();
        assert_eq!(ids.len(), catalogue().len());
    }

    #[rstest]
    #[case("hokkaido", Region::Hokkaido)]
    #[case("NIIGATA", Region::Niigata)]
    #[case("Gifu", Region::Gifu)]
    fn parses_region_names_case_insensitively(#[case] raw: &str, #[case] expected: Region) {
        assert_eq!(raw.parse::<Region>(), Ok(expected));
    }

    #[rstest]
    fn parsing_rejects_unknown_region() {
        let err = "Kyushu".parse::<Region>().expect_err("unknown region");
        assert!(err.contains("unknown region"));
    }

    #[rstest]
    fn filter_parses_all_keyword() {
        assert_eq!("ALL".parse::<RegionFilter>(), Ok(RegionFilter::All));
        assert_eq!(
            "gunma".parse::<RegionFilter>(),
            Ok(RegionFilter::Only(Region::Gunma))
        );
    }

    #[rstest]
    fn region_filter_selects_matching_resorts() {
        let gifu: Vec<&str> = RegionFilter::Only(Region::Gifu)
            .resorts()
            .map(|resort| resort.id)
            .collect();
        assert_eq!(gifu, vec!["takasu", "dynaland"]);
    }

    #[rstest]
    fn unknown_ids_only_pass_the_all_filter() {
        assert!(RegionFilter::All.matches_id("backcountry-secret"));
        assert!(!RegionFilter::Only(Region::Nagano).matches_id("backcountry-secret"));
        assert!(RegionFilter::Only(Region::Nagano).matches_id("hakuba"));
    }
}
