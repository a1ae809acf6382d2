//! The platform catalog: one keyed table of every console the library
//! knows how to shelve.
//!
//! System id, display category, external catalog id, and recognized file
//! extensions are all projections of the same record, so they cannot drift
//! apart the way independently maintained per-field tables would.

/// File-resolution support for a platform.
///
/// Distinguishes "we know the extensions" from "cataloged, but file
/// resolution is intentionally not available yet" (disc-less digital
/// platforms, formats nobody has settled on). Unknown platforms are a
/// third state, expressed by [`descriptor_for`] returning `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionSupport {
    /// Recognized extensions, each with its leading dot. Matching is
    /// case-insensitive.
    Supported(&'static [&'static str]),
    /// Platform is cataloged but no file format is resolvable.
    Unsupported,
}

impl ExtensionSupport {
    /// Case-insensitive extension match. Always false for `Unsupported`,
    /// so an unsupported platform can never claim a real file.
    pub fn matches(&self, extension: &str) -> bool {
        match self {
            Self::Supported(exts) => exts.iter().any(|e| e.eq_ignore_ascii_case(extension)),
            Self::Unsupported => false,
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Supported(_))
    }
}

/// Everything the library knows about one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformDescriptor {
    /// Stable human-readable key (e.g. "Nintendo SNES"). Case-sensitive.
    pub display_name: &'static str,
    /// Canonical short system code (e.g. "SNES").
    pub system_id: &'static str,
    /// Display category used by library hosts (e.g. "SNESGame").
    pub display_category: &'static str,
    /// Numeric id in the external games catalog, where one exists.
    pub catalog_id: Option<u32>,
    /// Recognized file extensions, or explicit unsupport.
    pub extensions: ExtensionSupport,
}

impl PlatformDescriptor {
    /// Case-insensitive check against the recognized extension set.
    pub fn matches_extension(&self, extension: &str) -> bool {
        self.extensions.matches(extension)
    }
}

use ExtensionSupport::{Supported, Unsupported};

macro_rules! descriptor {
    ($display:literal, $system:literal, $category:literal, $catalog:expr, $ext:expr) => {
        PlatformDescriptor {
            display_name: $display,
            system_id: $system,
            display_category: $category,
            catalog_id: $catalog,
            extensions: $ext,
        }
    };
}

/// The catalog, in registration order.
#[rustfmt::skip]
static PLATFORMS: &[PlatformDescriptor] = &[
    descriptor!("Arcade", "Arcade", "ArcadeGame", Some(23), Supported(&[".lnk", ".zip", ".rar", ".7z"])),
    descriptor!("Amstrad GX4000", "GX4000", "GX4000Game", None, Supported(&[".crt"])),
    descriptor!("Atari 2600", "Atari2600", "Atari2600Game", Some(22), Supported(&[".bin", ".a26"])),
    descriptor!("Atari 5200", "Atari5200", "Atari5200Game", Some(26), Supported(&[".a52"])),
    descriptor!("Atari 7800", "Atari7800", "Atari7800Game", Some(27), Supported(&[".a78"])),
    descriptor!("Atari Jaguar", "AtariJaguar", "AtariJaguarGame", Some(28), Supported(&[".jag", ".j64"])),
    descriptor!("Atari Jaguar CD", "AtariJaguarCD", "AtariJaguarCDGame", Some(29), Supported(&[".cdi"])),
    descriptor!("Atari XE", "AtariXE", "AtariXEGame", Some(30), Supported(&[".rom"])),
    descriptor!("Bally Astrocade", "Astrocade", "AstrocadeGame", Some(4968), Supported(&[".bin"])),
    descriptor!("ColecoVision", "ColecoVision", "ColecoVisionGame", Some(31), Supported(&[".rom", ".col"])),
    descriptor!("Commodore Amiga CD32", "AmigaCD32", "AmigaCD32Game", Some(4947), Supported(&[".cue"])),
    descriptor!("Entex Adventure Vision", "AdventureVision", "AdventureVisionGame", None, Supported(&[".bin"])),
    descriptor!("Fairchild Channel F", "ChannelF", "ChannelFGame", Some(4928), Supported(&[".bin"])),
    descriptor!("GCE Vectrex", "Vectrex", "VectrexGame", Some(4939), Supported(&[".bin"])),
    descriptor!("Magnavox Odyssey", "Odyssey", "OdysseyGame", Some(4961), Supported(&[".bin"])),
    descriptor!("Magnavox Odyssey 2", "Odyssey2", "Odyssey2Game", Some(4927), Supported(&[".bin"])),
    descriptor!("Mattel Intellivision", "Intellivision", "IntellivisionGame", Some(32), Supported(&[".int"])),
    descriptor!("Microsoft Xbox", "Xbox", "XboxGame", Some(14), Unsupported),
    descriptor!("Microsoft Xbox 360", "Xbox360", "Xbox360Game", Some(15), Unsupported),
    descriptor!("Microsoft Xbox One", "XboxOne", "XboxOneGame", Some(4920), Unsupported),
    descriptor!("NEC PC-FX", "PCFX", "PCFXGame", Some(4930), Supported(&[".cue"])),
    descriptor!("NEC SuperGrafx", "SuperGrafx", "SuperGrafxGame", None, Supported(&[".pce"])),
    descriptor!("NEC TurboGrafx 16", "TurboGrafx16", "TurboGrafx16Game", Some(34), Supported(&[".pce"])),
    descriptor!("NEC TurboGrafx CD", "TurboGrafxCD", "TurboGrafxCDGame", Some(4955), Supported(&[".cue"])),
    descriptor!("Nintendo 64", "Nintendo64", "Nintendo64Game", Some(3), Supported(&[".n64", ".v64", ".z64"])),
    descriptor!("Nintendo Famicom Disk System", "FamicomDiskSystem", "FamicomDiskSystemGame", Some(4936), Supported(&[".fds"])),
    descriptor!("Nintendo GameCube", "GameCube", "GameCubeGame", Some(2), Supported(&[".iso", ".gcm"])),
    descriptor!("Nintendo NES", "NES", "NESGame", Some(7), Supported(&[".nes"])),
    descriptor!("Nintendo SNES", "SNES", "SNESGame", Some(6), Supported(&[".smc", ".sfc"])),
    descriptor!("Nintendo Switch", "Switch", "SwitchGame", None, Unsupported),
    descriptor!("Nintendo Virtual Boy", "VirtualBoy", "VirtualBoyGame", Some(4918), Supported(&[".vb"])),
    descriptor!("Nintendo Wii", "Wii", "WiiGame", Some(9), Supported(&[".iso"])),
    descriptor!("Nintendo Wii U", "WiiU", "WiiUGame", Some(38), Unsupported),
    descriptor!("Panasonic 3DO", "3DO", "3DOGame", Some(25), Supported(&[".cue"])),
    descriptor!("Philips CD-i", "CD-i", "CD-iGame", Some(4917), Supported(&[".chd"])),
    descriptor!("Sega 32X", "Sega32X", "Sega32XGame", Some(33), Supported(&[".bin", ".32x"])),
    descriptor!("Sega CD", "SegaCD", "SegaCDGame", Some(21), Supported(&[".cue"])),
    descriptor!("Sega CD 32X", "SegaCD32X", "SegaCD32XGame", None, Supported(&[".cue"])),
    descriptor!("Sega Dreamcast", "Dreamcast", "DreamcastGame", Some(16), Supported(&[".cdi", ".gdi"])),
    descriptor!("Sega Master System", "MasterSystem", "MasterSystemGame", Some(35), Supported(&[".sms", ".bin"])),
    descriptor!("Sega Mega Drive", "MegaDrive", "MegaDriveGame", Some(36), Supported(&[".smd", ".bin"])),
    descriptor!("Sega Saturn", "Saturn", "SaturnGame", Some(17), Supported(&[".cue", ".mds"])),
    descriptor!("Sega SG-1000 & SG-1000II", "SG1000&SG1000II", "SG1000&SG1000IIGame", Some(4949), Supported(&[".sg"])),
    descriptor!("SNK Neo-Geo AES", "NeoGeoAES", "NeoGeoAESGame", Some(24), Supported(&[".zip", ".rar", ".7z"])),
    descriptor!("SNK Neo-Geo CD", "NeoGeoCD", "NeoGeoCDGame", Some(4956), Supported(&[".cue"])),
    descriptor!("Sony Playstation", "Playstation", "PlaystationGame", Some(10), Supported(&[".cue", ".ccd"])),
    descriptor!("Sony Playstation 2", "Playstation2", "Playstation2Game", Some(11), Supported(&[".cue", ".iso"])),
    descriptor!("Sony Playstation 3", "Playstation3", "Playstation3Game", Some(12), Unsupported),
    descriptor!("Sony Playstation 4", "Playstation4", "Playstation4Game", Some(4919), Unsupported),
    descriptor!("WoW Action Max", "ActionMax", "ActionMaxGame", None, Supported(&[".lnk"])),
    descriptor!("Atari Lynx", "Lynx", "LynxGame", Some(4924), Supported(&[".lnx"])),
    descriptor!("Bandai Wonderswan", "Wonderswan", "WonderswanGame", Some(4925), Supported(&[".ws"])),
    descriptor!("Bandai Wonderswan Color", "WonderswanColor", "WonderswanColorGame", Some(4926), Supported(&[".wsc"])),
    descriptor!("Nintendo 3DS", "3DS", "3DSGame", Some(4912), Unsupported),
    descriptor!("Nintendo DS", "DS", "DSGame", Some(8), Supported(&[".nds"])),
    descriptor!("Nintendo Game Boy", "GameBoy", "GameBoyGame", Some(4), Supported(&[".gb"])),
    descriptor!("Nintendo Game Boy Advance", "GameBoyAdvance", "GameBoyAdvanceGame", Some(5), Supported(&[".gba"])),
    descriptor!("Nintendo Game Boy Color", "GameBoyColor", "GameBoyColorGame", Some(41), Supported(&[".gbc"])),
    descriptor!("Sega Game Gear", "GameGear", "GameGearGame", Some(20), Supported(&[".gg"])),
    descriptor!("SNK Neo-Geo Pocket", "NeoGeoPocket", "NeoGeoPocketGame", Some(4922), Supported(&[".ngp"])),
    descriptor!("SNK Neo-Geo Pocket Color", "NeoGeoPocketColor", "NeoGeoPocketColorGame", Some(4923), Supported(&[".ngp", ".ngc", ".npc"])),
    descriptor!("Sony PSP", "PSP", "PSPGame", Some(13), Supported(&[".iso", ".cso"])),
    descriptor!("Sony PSVita", "PSVita", "PSVitaGame", Some(39), Unsupported),
    descriptor!("Apple iOS", "iOS", "iOSGame", Some(4915), Unsupported),
    descriptor!("Google Android", "Android", "AndroidGame", Some(4916), Unsupported),
    descriptor!("Microsoft Windows 10 UWP", "Windows10UWP", "Windows10UWPGame", None, Unsupported),
    descriptor!("Commodore Vic-20", "Vic20", "Vic20Game", Some(4945), Supported(&[".prg"])),
    descriptor!("Fujitsu FM Towns", "FMTowns", "FMTownsGame", None, Unsupported),
    descriptor!("Fujitsu FM-7", "FM7", "FM7Game", None, Supported(&[".cue"])),
    descriptor!("Microsoft MS-DOS", "DOS", "DOSGame", None, Supported(&[".cue"])),
    descriptor!("Microsoft MSX", "MSX", "MSXGame", Some(4929), Supported(&[".rom", ".mx1", ".col", ".dsk"])),
    descriptor!("Microsoft MSX-2", "MSX2", "MSX2Game", None, Supported(&[".rom", ".mx2", ".col", ".dsk"])),
    descriptor!("Microsoft Windows", "Windows", "WindowsGame", Some(1), Supported(&[".lnk"])),
    descriptor!("NEC PC-60", "PC60", "PC60Game", None, Unsupported),
    descriptor!("NEC PC-80", "PC80", "PC80Game", None, Unsupported),
    descriptor!("NEC PC-88", "PC88", "PC88Game", Some(4933), Unsupported),
    descriptor!("NEC-PC-98", "PC98", "PC98Game", Some(4934), Supported(&[".fdi", ".hdi"])),
    descriptor!("Sega SC-3000", "SC3000", "SC3000Game", None, Supported(&[".sc", ".sms"])),
    descriptor!("Sharp X1", "SharpX1", "SharpX1Game", None, Unsupported),
    descriptor!("Sharp X68000", "SharpX68000", "SharpX68000Game", Some(4931), Unsupported),
    descriptor!("Sinclair ZX Spectrum", "ZXSpectrum", "ZXSpectrumGame", Some(4913), Supported(&[".z80", ".tap", ".tzx", ".sna", ".dsk", ".rom", ".slt", ".zxs"])),
];

/// Look up a platform by its display name.
///
/// The key is matched case-sensitively. Unknown names return `None`;
/// there is no default descriptor.
///
/// # Panics
///
/// Panics on an empty name. An empty key is a caller bug, not an
/// unknown platform.
pub fn descriptor_for(display_name: &str) -> Option<&'static PlatformDescriptor> {
    assert!(!display_name.is_empty(), "platform display name must not be empty");
    PLATFORMS.iter().find(|d| d.display_name == display_name)
}

/// All cataloged platforms, in registration order.
pub fn all() -> &'static [PlatformDescriptor] {
    PLATFORMS
}

/// System ids that represent native launcher shortcuts rather than
/// emulated ROMs. Entities on these systems are placeholders.
pub fn is_placeholder_system(system_id: &str) -> bool {
    system_id.eq_ignore_ascii_case("windows") || system_id.eq_ignore_ascii_case("dos")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_deterministic() {
        for d in all() {
            let first = descriptor_for(d.display_name).unwrap();
            let second = descriptor_for(d.display_name).unwrap();
            assert_eq!(first, second);
            assert_eq!(first.system_id, d.system_id);
        }
    }

    #[test]
    fn display_names_are_unique() {
        for (i, d) in all().iter().enumerate() {
            let first_index = all()
                .iter()
                .position(|o| o.display_name == d.display_name)
                .unwrap();
            assert_eq!(first_index, i, "duplicate display name '{}'", d.display_name);
        }
    }

    #[test]
    fn key_is_case_sensitive() {
        assert!(descriptor_for("Nintendo SNES").is_some());
        assert!(descriptor_for("nintendo snes").is_none());
    }

    #[test]
    fn unknown_platform_has_no_descriptor() {
        assert!(descriptor_for("Coleco Telstar").is_none());
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn empty_name_is_a_caller_bug() {
        let _ = descriptor_for("");
    }

    #[test]
    fn extension_matching_ignores_case() {
        let snes = descriptor_for("Nintendo SNES").unwrap();
        assert!(snes.matches_extension(".sfc"));
        assert!(snes.matches_extension(".SFC"));
        assert!(!snes.matches_extension(".nes"));
    }

    #[test]
    fn unsupported_platform_never_matches_a_file() {
        let xbox360 = descriptor_for("Microsoft Xbox 360").unwrap();
        assert!(!xbox360.extensions.is_supported());
        assert!(!xbox360.matches_extension(".iso"));
        assert!(!xbox360.matches_extension(""));
    }

    #[test]
    fn every_platform_projects_system_id_and_category() {
        // A platform may lack extensions or a catalog id, but system id and
        // display category must always resolve. This pins the asymmetry:
        // catalog-listed but file-resolution-unsupported is a valid state.
        for d in all() {
            assert!(!d.system_id.is_empty(), "{} has no system id", d.display_name);
            assert!(
                !d.display_category.is_empty(),
                "{} has no display category",
                d.display_name
            );
        }
    }

    #[test]
    fn placeholder_set_is_windows_and_dos() {
        assert!(is_placeholder_system("Windows"));
        assert!(is_placeholder_system("DOS"));
        assert!(is_placeholder_system("dos"));
        assert!(!is_placeholder_system("SNES"));
        assert!(!is_placeholder_system("Windows10UWP"));
    }

    #[test]
    fn extensions_carry_a_leading_dot() {
        for d in all() {
            if let ExtensionSupport::Supported(exts) = d.extensions {
                for ext in exts {
                    assert!(
                        ext.starts_with('.'),
                        "{} extension '{}' is missing its dot",
                        d.display_name,
                        ext
                    );
                }
            }
        }
    }
}
