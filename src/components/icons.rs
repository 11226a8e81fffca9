//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;
use shelf_core::Category;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBox as Model, LuChevronLeft as ChevronLeft, LuCircleAlert as Error, LuCode as Code,
        LuDownload as Download, LuFile as File, LuFolder as Folder, LuFolderOpen as FolderOpen,
        LuImage as FileImage, LuImages as Images, LuLoader as Spinner, LuMoon as Moon,
        LuMusic as Music, LuMusic2 as FileAudio, LuPackage as Package, LuSearch as Search,
        LuSun as Sun,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowRepeat as Spinner, BsBox as Model, BsBoxSeam as Package,
        BsChevronLeft as ChevronLeft, BsDownload as Download,
        BsExclamationCircleFill as Error, BsFileEarmark as File,
        BsFileEarmarkCode as Code, BsFileEarmarkImage as FileImage,
        BsFileEarmarkMusic as FileAudio, BsFolder2Open as FolderOpen, BsFolderFill as Folder,
        BsImages as Images, BsMoonFill as Moon, BsMusicNoteBeamed as Music,
        BsSearch as Search, BsSunFill as Sun,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(FOLDER, Folder);
themed_icon!(FOLDER_OPEN, FolderOpen);
themed_icon!(FILE, File);
themed_icon!(MUSIC, Music);
themed_icon!(FILE_AUDIO, FileAudio);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_CODE, Code);
themed_icon!(MODEL, Model);
themed_icon!(PACKAGE, Package);
themed_icon!(IMAGES, Images);
themed_icon!(SEARCH, Search);
themed_icon!(DOWNLOAD, Download);
themed_icon!(SUN, Sun);
themed_icon!(MOON, Moon);
themed_icon!(SPINNER, Spinner);
themed_icon!(ERROR, Error);

// =============================================================================
// Catalog Lookups
// =============================================================================

/// Folder tile icon.
pub fn folder_icon(category: Option<Category>) -> Icon {
    match category {
        Some(Category::Sounds) => MUSIC,
        Some(Category::Models) => MODEL,
        Some(Category::Scripts) => FILE_CODE,
        Some(Category::Images) => IMAGES,
        Some(Category::UnityPackages) => PACKAGE,
        None => FOLDER,
    }
}

/// File tile icon, keyed by the category its extension maps to.
pub fn file_icon(category: Option<Category>) -> Icon {
    match category {
        Some(Category::Sounds) => FILE_AUDIO,
        Some(Category::Models) => MODEL,
        Some(Category::Scripts) => FILE_CODE,
        Some(Category::Images) => FILE_IMAGE,
        Some(Category::UnityPackages) => PACKAGE,
        None => FILE,
    }
}
