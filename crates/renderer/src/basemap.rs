//! Tile provider catalog.
//!
//! Each basemap carries its tile URL template, attribution and zoom ceiling.
//! Identifiers are the stable strings accepted by the `basemap` query
//! parameter and the config file.

use std::fmt;
use std::str::FromStr;

use glof_common::HazardMapError;
use serde::{Deserialize, Serialize};

/// Supported background tile providers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaseMap {
    #[serde(rename = "openstreetmap")]
    OpenStreetMap,
    #[default]
    #[serde(rename = "cartodb-positron")]
    CartoDbPositron,
    #[serde(rename = "cartodb-dark-matter")]
    CartoDbDarkMatter,
    #[serde(rename = "stamen-terrain")]
    StamenTerrain,
    #[serde(rename = "stamen-toner")]
    StamenToner,
    #[serde(rename = "stamen-watercolor")]
    StamenWatercolor,
    #[serde(rename = "esri-world-imagery")]
    EsriWorldImagery,
    #[serde(rename = "esri-natgeo")]
    EsriNatGeo,
    #[serde(rename = "opentopomap")]
    OpenTopoMap,
    #[serde(rename = "nasagibs-night-lights")]
    NasaGibsNightLights,
}

impl BaseMap {
    /// Every provider, in sidebar display order.
    pub const ALL: [BaseMap; 10] = [
        BaseMap::OpenStreetMap,
        BaseMap::CartoDbPositron,
        BaseMap::CartoDbDarkMatter,
        BaseMap::StamenTerrain,
        BaseMap::StamenToner,
        BaseMap::StamenWatercolor,
        BaseMap::EsriWorldImagery,
        BaseMap::EsriNatGeo,
        BaseMap::OpenTopoMap,
        BaseMap::NasaGibsNightLights,
    ];

    /// Stable identifier used in query strings and config files.
    pub fn id(&self) -> &'static str {
        match self {
            BaseMap::OpenStreetMap => "openstreetmap",
            BaseMap::CartoDbPositron => "cartodb-positron",
            BaseMap::CartoDbDarkMatter => "cartodb-dark-matter",
            BaseMap::StamenTerrain => "stamen-terrain",
            BaseMap::StamenToner => "stamen-toner",
            BaseMap::StamenWatercolor => "stamen-watercolor",
            BaseMap::EsriWorldImagery => "esri-world-imagery",
            BaseMap::EsriNatGeo => "esri-natgeo",
            BaseMap::OpenTopoMap => "opentopomap",
            BaseMap::NasaGibsNightLights => "nasagibs-night-lights",
        }
    }

    /// Human-readable name for selector UIs.
    pub fn label(&self) -> &'static str {
        match self {
            BaseMap::OpenStreetMap => "OpenStreetMap",
            BaseMap::CartoDbPositron => "CartoDB Positron",
            BaseMap::CartoDbDarkMatter => "CartoDB Dark Matter",
            BaseMap::StamenTerrain => "Stamen Terrain",
            BaseMap::StamenToner => "Stamen Toner",
            BaseMap::StamenWatercolor => "Stamen Watercolor",
            BaseMap::EsriWorldImagery => "Esri Satellite",
            BaseMap::EsriNatGeo => "Esri NatGeo",
            BaseMap::OpenTopoMap => "OpenTopoMap",
            BaseMap::NasaGibsNightLights => "NASAGIBS Night Lights",
        }
    }

    /// Leaflet tile URL template.
    pub fn tile_url(&self) -> &'static str {
        match self {
            BaseMap::OpenStreetMap => "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            BaseMap::CartoDbPositron => {
                "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png"
            }
            BaseMap::CartoDbDarkMatter => {
                "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png"
            }
            BaseMap::StamenTerrain => {
                "https://tiles.stadiamaps.com/tiles/stamen_terrain/{z}/{x}/{y}{r}.png"
            }
            BaseMap::StamenToner => {
                "https://tiles.stadiamaps.com/tiles/stamen_toner/{z}/{x}/{y}{r}.png"
            }
            BaseMap::StamenWatercolor => {
                "https://tiles.stadiamaps.com/tiles/stamen_watercolor/{z}/{x}/{y}.jpg"
            }
            BaseMap::EsriWorldImagery => {
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}"
            }
            BaseMap::EsriNatGeo => {
                "https://server.arcgisonline.com/ArcGIS/rest/services/NatGeo_World_Map/MapServer/tile/{z}/{y}/{x}"
            }
            BaseMap::OpenTopoMap => "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png",
            BaseMap::NasaGibsNightLights => {
                "https://map1.vis.earthdata.nasa.gov/wmts-webmerc/VIIRS_CityLights_2012/default//GoogleMapsCompatible_Level8/{z}/{y}/{x}.jpg"
            }
        }
    }

    /// Attribution line required by the provider.
    pub fn attribution(&self) -> &'static str {
        match self {
            BaseMap::OpenStreetMap => {
                "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
            }
            BaseMap::CartoDbPositron | BaseMap::CartoDbDarkMatter => {
                "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>"
            }
            BaseMap::StamenTerrain | BaseMap::StamenToner | BaseMap::StamenWatercolor => {
                "&copy; <a href=\"https://www.stadiamaps.com/\">Stadia Maps</a> &copy; <a href=\"https://www.stamen.com/\">Stamen Design</a> &copy; OpenStreetMap contributors"
            }
            BaseMap::EsriWorldImagery => {
                "Tiles &copy; Esri &mdash; Source: Esri, i-cubed, USDA, USGS, AEX, GeoEye, and the GIS User Community"
            }
            BaseMap::EsriNatGeo => {
                "Tiles &copy; Esri &mdash; National Geographic, Esri, DeLorme, NAVTEQ, UNEP-WCMC, USGS, NASA, ESA, METI, NRCAN, GEBCO, NOAA, iPC"
            }
            BaseMap::OpenTopoMap => {
                "Map data: &copy; OpenStreetMap contributors, SRTM | Map style: &copy; <a href=\"https://opentopomap.org\">OpenTopoMap</a> (CC-BY-SA)"
            }
            BaseMap::NasaGibsNightLights => {
                "Imagery provided by services from the Global Imagery Browse Services (GIBS), operated by NASA/GSFC/ESDIS"
            }
        }
    }

    /// Deepest zoom level the provider serves tiles for.
    pub fn max_zoom(&self) -> u8 {
        match self {
            BaseMap::OpenStreetMap => 19,
            BaseMap::CartoDbPositron | BaseMap::CartoDbDarkMatter => 20,
            BaseMap::StamenTerrain => 18,
            BaseMap::StamenToner => 20,
            BaseMap::StamenWatercolor => 16,
            BaseMap::EsriWorldImagery => 19,
            BaseMap::EsriNatGeo => 16,
            BaseMap::OpenTopoMap => 17,
            BaseMap::NasaGibsNightLights => 8,
        }
    }
}

impl fmt::Display for BaseMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for BaseMap {
    type Err = HazardMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BaseMap::ALL
            .iter()
            .copied()
            .find(|b| b.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| HazardMapError::InvalidParameter {
                param: "basemap".to_string(),
                message: format!("Unknown basemap '{}'", s),
            })
    }
}
