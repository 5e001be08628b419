mod gitignore;
mod go_mod;
mod package_go;

pub use gitignore::GitIgnore;
pub use go_mod::GoMod;
pub use package_go::PackageFile;
