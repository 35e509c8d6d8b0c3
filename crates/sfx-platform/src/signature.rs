use sfx_core::ClientSignature;

/// Signature of the platform this process runs on (`windows`, `macos`, `linux`, ...).
pub fn native_client_signature() -> ClientSignature {
    ClientSignature::new(std::env::consts::OS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sfx_core::OsPreference;

    #[test]
    fn native_signature_matches_build_target() {
        let detected = native_client_signature().detect();
        if cfg!(windows) {
            assert_eq!(detected, OsPreference::Windows);
        } else if cfg!(target_os = "macos") {
            assert_eq!(detected, OsPreference::Mac);
        } else if cfg!(target_os = "linux") {
            assert_eq!(detected, OsPreference::Linux);
        }
    }
}
