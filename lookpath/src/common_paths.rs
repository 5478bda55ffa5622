/// Well-known directories where shells and package managers
/// install binaries, searched after `$PATH` on request.
///
/// Entries starting with `~` are kept literally, they only match
/// if a directory with that very name exists.
pub const COMMON_PATHS: &[&str] = &[
    // linux and mac
    "/bin",
    "/sbin",
    "/usr/bin",
    "/usr/sbin",
    "/usr/local/bin",
    "/usr/local/sbin",
    // homebrew
    "/opt/homebrew/bin",
    "/opt/homebrew/opt/curl/bin",
    "/opt/homebrew/opt/fzf/bin",
    "/opt/homebrew/opt/openssl/bin",
    "/opt/homebrew/opt/ruby/bin",
    "/opt/homebrew/sbin",
    // conda
    "/opt/miniconda2/bin",
    "/opt/miniconda3/bin",
    "~/anaconda/bin",
    "~/anaconda2/bin",
    "~/anaconda3/bin",
    // distro extras
    "/snap/bin",
    "/usr/games",
    "/usr/local/games",
    "/usr/local/go/bin",
    "/usr/local/opt/openssl/bin",
    "/usr/local/opt/ruby/bin",
    // per-user toolchains
    "~/.local/bin",
    "~/.bun/bin",
    "~/.cargo/bin",
    "~/.config/yarn/global/node_modules/.bin",
    "~/.go/bin",
    "~/.rvm/bin",
    "~/.yarn/bin",
];
