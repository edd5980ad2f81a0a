//! Shared descriptor fixtures for integration tests.

#![allow(dead_code)]

use modpack::descriptor::{
    Choice, CompatOrder, Configuration, DonationLink, Download, DownloadFiles, Game, InstallType,
    Mod, ModCompat, ModCompatibility, ModDir, ModFile, Preview, SelectionType, Size,
};

/// A valid descriptor exercising every descriptor field.
///
/// Configuration graph: `Style` (root) → `Font`, with `Style/Classic`
/// terminating immediately.
pub fn full_mod() -> Mod {
    let mut m = Mod::new("ff6.widescreen", "Widescreen UI")
        .with_download(
            Download::new("core", InstallType::Memoria)
                .with_source("https://down.example/core.zip")
                .with_source("https://mirror.example/core.zip"),
        )
        .with_download(
            Download::new("fonts", InstallType::Bundles).with_source("https://down.example/fonts.zip"),
        )
        .with_download(
            Download::new("loader", InstallType::BepInEx)
                .with_source("https://down.example/loader.zip"),
        )
        .with_always_install(
            DownloadFiles::new("core")
                .with_file(ModFile::new("ui.bundle", "StreamingAssets/ui.bundle"))
                .with_dir(ModDir::new("Magicite", "Magicite", true)),
        )
        .with_configuration(
            Configuration::new("Style")
                .as_root()
                .with_description("Battle UI style")
                .with_choice(
                    Choice::new("Classic")
                        .with_description("Original layout")
                        .with_files(
                            DownloadFiles::new("core")
                                .with_file(ModFile::new("classic.bundle", "StreamingAssets/style.bundle")),
                        ),
                )
                .with_choice(
                    Choice::new("Modern")
                        .with_description("Wide layout")
                        .with_files(
                            DownloadFiles::new("core")
                                .with_file(ModFile::new("modern.bundle", "StreamingAssets/style.bundle")),
                        )
                        .with_next("Font"),
                ),
        )
        .with_configuration(
            Configuration::new("Font")
                .with_description("Menu font")
                .with_choice(
                    Choice::new("Sans").with_files(
                        DownloadFiles::new("fonts").with_file(ModFile::new("sans.bundle", "Fonts/menu.bundle")),
                    ),
                )
                .with_choice(
                    Choice::new("Serif").with_files(
                        DownloadFiles::new("fonts")
                            .with_file(ModFile::new("serif.bundle", "Fonts/menu.bundle")),
                    ),
                ),
        )
        .with_compatibility(
            ModCompatibility::default()
                .with_require(
                    ModCompat::new("ff6.loader")
                        .with_name("Loader")
                        .with_version("1.0")
                        .with_version("1.1")
                        .with_source("nexus")
                        .with_order(CompatOrder::After),
                )
                .with_forbid(ModCompat::new("ff6.oldui").with_name("Old UI")),
        )
        .with_game(Game::new("Final Fantasy VI").with_version("1.0.3"))
        .with_selection_type(SelectionType::Select);

    m.author = "kupo".to_string();
    m.version = "2.1".to_string();
    m.release_date = "Mar 14 2024".to_string();
    m.category = "UI".to_string();
    m.description = "Widescreen battle and menu UI".to_string();
    m.release_notes = "Fixes menu scaling".to_string();
    m.link = "https://example.com/widescreen".to_string();
    m.mod_file_links = vec![
        "https://example.com/widescreen.json".to_string(),
        "https://example.com/widescreen.xml".to_string(),
    ];
    m.preview = Some(Preview::remote("https://example.com/preview.png", Size::new(640, 360)));
    m.donation_links.push(DonationLink {
        name: "Ko-fi".to_string(),
        link: "https://ko-fi.example/kupo".to_string(),
    });
    m
}
