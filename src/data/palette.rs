//! Region-keyed color tables for blocs and edge types.
//!
//! Lookups fall back from the requested region's table to the default
//! region's table, then to [`NEUTRAL`], so every tag gets a visible swatch.

use super::region::Region;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with alpha in `0.0..=1.0`.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Opaque color from a `0xRRGGBB` literal.
	pub const fn hex(rgb: u32) -> Self {
		Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
	}

	/// Same color with alpha replaced by `a`.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS `rgba(...)` string.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Swatch for tags no table knows about.
pub const NEUTRAL: Color = Color::hex(0x64748b);

/// Highlight ring for FTZ target cities.
pub const FTZ_RING: Color = Color::hex(0xfbbf24);

type ColorTable = &'static [(&'static str, Color)];

const WEST_AFRICA_BLOCS: ColorTable = &[
	("ECOWAS", Color::hex(0x00d4aa)),
	("UEMOA", Color::hex(0x818cf8)),
	("SUSPENDED", Color::hex(0xff4466)),
	("EXTERNAL", Color::hex(0x94a3b8)),
];

const EUROPE_BLOCS: ColorTable = &[
	("EU", Color::hex(0x60a5fa)),
	("EEA", Color::hex(0x34d399)),
	("EFTA", Color::hex(0xa78bfa)),
	("CANDIDATE", Color::hex(0xfbbf24)),
	("PARTNER", Color::hex(0x94a3b8)),
];

const WORLD_BLOCS: ColorTable = &[
	("G7", Color::hex(0x60a5fa)),
	("BRICS", Color::hex(0xf87171)),
	("ASEAN", Color::hex(0x34d399)),
	("AU", Color::hex(0xfbbf24)),
	("EU", Color::hex(0x818cf8)),
	("MERCOSUR", Color::hex(0xf472b6)),
	("GCC", Color::hex(0xc084fc)),
	("APEC", Color::hex(0x38bdf8)),
];

const REGIONS_BLOCS: ColorTable = &[
	("NAFTA", Color::hex(0xf97316)),
	("EU", Color::hex(0x818cf8)),
	("ASEAN", Color::hex(0x34d399)),
	("AU", Color::hex(0xfbbf24)),
	("MERCOSUR", Color::hex(0xf472b6)),
	("GCC", Color::hex(0xc084fc)),
	("CPTPP", Color::hex(0x38bdf8)),
];

const WEST_AFRICA_EDGES: ColorTable = &[
	("TRADE", Color::hex(0x00d4aa)),
	("POLITICAL", Color::hex(0x818cf8)),
	("CULTURAL", Color::hex(0xc084fc)),
	("MIGRATORY", Color::hex(0xfbbf24)),
	("LABOUR", Color::hex(0xf97316)),
	("INFRASTRUCTURE", Color::hex(0x38bdf8)),
	("FINANCIAL", Color::hex(0xf472b6)),
];

// Shared edge types are inherited from the default table.
const EUROPE_EDGES: ColorTable = &[("ENERGY", Color::hex(0xfacc15))];

const WORLD_EDGES: ColorTable = &[
	("SUPPLY_CHAIN", Color::hex(0x2dd4bf)),
	("DIPLOMATIC", Color::hex(0xa3e635)),
];

const REGIONS_EDGES: ColorTable = &[
	("AID", Color::hex(0xfb7185)),
	("COMMODITY", Color::hex(0xeab308)),
	("TECH_TRANSFER", Color::hex(0x22d3ee)),
];

/// Bloc color table for a region.
pub fn bloc_table(region: Region) -> ColorTable {
	match region {
		Region::WestAfrica => WEST_AFRICA_BLOCS,
		Region::Europe => EUROPE_BLOCS,
		Region::World => WORLD_BLOCS,
		Region::Regions => REGIONS_BLOCS,
	}
}

/// Edge-type color table for a region.
pub fn edge_type_table(region: Region) -> ColorTable {
	match region {
		Region::WestAfrica => WEST_AFRICA_EDGES,
		Region::Europe => EUROPE_EDGES,
		Region::World => WORLD_EDGES,
		Region::Regions => REGIONS_EDGES,
	}
}

fn lookup(table: ColorTable, key: &str) -> Option<Color> {
	table.iter().find(|(k, _)| *k == key).map(|&(_, c)| c)
}

fn resolve(key: &str, region: Region, table: fn(Region) -> ColorTable) -> Color {
	lookup(table(region), key)
		.or_else(|| lookup(table(Region::DEFAULT), key))
		.unwrap_or(NEUTRAL)
}

/// Color for a bloc tag in `region`.
pub fn resolve_bloc_color(bloc: &str, region: Region) -> Color {
	resolve(bloc, region, bloc_table)
}

/// Color for an edge type in `region`.
pub fn resolve_edge_type_color(edge_type: &str, region: Region) -> Color {
	resolve(edge_type, region, edge_type_table)
}
