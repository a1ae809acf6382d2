//! System-id to catalog platform-name mapping.
//!
//! The catalog has its own platform vocabulary, independent of our system
//! ids and lossier: several systems have no catalog presence at all. Those
//! map to an empty token, which the catalog accepts and answers with zero
//! results. This table lives here rather than in the platform catalog
//! because it is a third-party API detail.

/// Map a system id to the catalog's platform token. Unknown ids and
/// systems without a catalog equivalent yield `""`.
pub fn catalog_platform(system_id: &str) -> &'static str {
    match system_id {
        "Arcade" => "MAME",
        "GX4000" => "GX4000",
        "Atari2600" => "Atari_2600",
        "Atari5200" => "Atari_5200",
        "Atari7800" => "Atari_7800",
        "AtariJaguar" => "Atari_Jaguar",
        "AtariJaguarCD" => "Atari_Jaguar_CD",
        "AtariXE" => "Atari_8-Bit",
        "Astrocade" => "Bally_Astrocade",
        "ColecoVision" => "Colecovision",
        "AmigaCD32" => "Amiga_CD32",
        "AdventureVision" => "Adventure_Vision",
        "ChannelF" => "Channel_F",
        "Vectrex" => "Vectrex",
        "Odyssey" => "Magnavox_Odyssey",
        "Odyssey2" => "Odyssey_2",
        "Intellivision" => "Intellivision",
        "Xbox" => "Xbox",
        "PCFX" => "PC-FX",
        "SuperGrafx" => "SuperGrafx",
        "TurboGrafx16" => "TurboGrafx-16",
        "TurboGrafxCD" => "TurboGrafx-CD",
        "Nintendo64" => "Nintendo_64",
        "FamicomDiskSystem" => "Famicom_Disk_System",
        "GameCube" => "GameCube",
        "NES" => "NES_Unified",
        "SNES" => "Super_Nintendo",
        "VirtualBoy" => "Virtual_Boy",
        "Wii" => "Nintendo_Wii",
        "3DO" => "3DO",
        "CD-i" => "Philips_CD-i",
        "Dreamcast" => "Sega_Dreamcast",
        "MasterSystem" => "Master_System",
        "MegaDrive" => "Genesis",
        "Saturn" => "Saturn",
        "SG1000&SG1000II" => "Sega_SG-1000",
        "Playstation" => "Playstation",
        "Playstation2" => "Playstation_2",
        "ActionMax" => "Action_Max",
        "Lynx" => "Atari_Lynx",
        "Wonderswan" => "Wonderswan",
        "WonderswanColor" => "Wonderswan_Color",
        "DS" => "Nintendo_DS",
        "GameBoy" => "Game_Boy",
        "GameBoyAdvance" => "GBA",
        "GameBoyColor" => "Game_Boy_Color",
        "GameGear" => "Game_Gear",
        "NeoGeoPocket" => "Neo_Geo_Pocket",
        "NeoGeoPocketColor" => "Neo_Geo_Pocket_Color",
        "PSP" => "Sony_PSP",
        "Android" => "Android",
        "Vic20" => "Commodore_Vic-20",
        "FMTowns" => "Fujitsu_FM_Towns",
        "DOS" => "Microsoft_DOS",
        "MSX" => "Microsoft_MSX",
        "Windows" => "Microsoft_Windows",
        "SC3000" => "Sega_SC-3000",
        "SharpX1" => "Sharp_X1",
        "SharpX68000" => "Sharp_X68000",
        "ZXSpectrum" => "ZX_Spectrum",
        // Systems the catalog doesn't carry (Xbox360, Switch, PS3/4,
        // NeoGeo AES/CD, SegaCD/32X, handheld successors, PC-60/80/88/98,
        // MSX2, FM-7, iOS, UWP, Vita) and anything unknown.
        _ => "",
    }
}
