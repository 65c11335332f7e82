use std::process::Command;

use super::ChimePlayer;

/// Plays a short ready-chime through whatever the OS has on hand.
///
/// Spawned fire-and-forget; a missing player binary means a silent
/// celebration, not an error.
pub struct DesktopChimePlayer;

impl ChimePlayer for DesktopChimePlayer {
    fn play(&self) {
        #[cfg(target_os = "macos")]
        {
            let _ = Command::new("afplay")
                .arg("/System/Library/Sounds/Glass.aiff")
                .spawn();
        }
        #[cfg(target_os = "windows")]
        {
            let _ = Command::new("powershell")
                .args(["-NoProfile", "-Command", "[console]::beep(880, 400)"])
                .spawn();
        }
        #[cfg(target_os = "linux")]
        {
            let _ = Command::new("canberra-gtk-play")
                .args(["-i", "complete"])
                .spawn();
        }
    }
}
