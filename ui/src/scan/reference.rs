//! Fixed reference data shown on every report. Illustrative only; nothing here is measured.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecurityCheck {
    pub name: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threat {
    pub name: &'static str,
    pub languages: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Risk {
    Low,
    Medium,
}

impl Risk {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Low => "app-tile--low",
            Self::Medium => "app-tile--medium",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstalledApp {
    pub name: &'static str,
    pub version: &'static str,
    pub risk: Risk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LargeFile {
    pub name: &'static str,
    pub size: &'static str,
    pub path: &'static str,
}

pub const SECURITY_CHECKS: [SecurityCheck; 3] = [
    SecurityCheck {
        name: "File System Access",
        status: "RESTRICTED (SECURE)",
    },
    SecurityCheck {
        name: "Malicious Scripts",
        status: "NONE DETECTED",
    },
    SecurityCheck {
        name: "Browser Sandbox",
        status: "ACTIVE",
    },
];

pub const INTEGRITY_PERCENT: u8 = 98;
pub const SECURITY_VERDICT: &str =
    "No critical vulnerabilities detected in the browser environment.";

pub const THREATS: [Threat; 6] = [
    Threat {
        name: "Trojans",
        languages: "C++, C, C# (.NET)",
        description: "Stealthy malware disguising as legitimate software.",
    },
    Threat {
        name: "RAT – Remote Access Trojans",
        languages: "C#, C++, Java",
        description: "Gain full administrative control remotely.",
    },
    Threat {
        name: "Ransomware",
        languages: "C/C++, C#, Go, and Rust",
        description: "Encrypts files for crypto-payment extortion.",
    },
    Threat {
        name: "Keyloggers",
        languages: "C++, C, C#",
        description: "Records keystrokes to steal credentials.",
    },
    Threat {
        name: "Exploit Scripts",
        languages: "C, Python, Ruby",
        description:
            "C for low-level (memory access). Python for automation. Ruby for Metasploit.",
    },
    Threat {
        name: "Injection Attacks (SQLi/XSS)",
        languages: "JavaScript, SQL",
        description: "JavaScript used in XSS. SQL used in SQL Injection.",
    },
];

pub const INSTALLED_APPS: [InstalledApp; 6] = [
    InstalledApp {
        name: "Google Chrome",
        version: "119.0.6045.124",
        risk: Risk::Low,
    },
    InstalledApp {
        name: "Visual Studio Code",
        version: "1.84.2",
        risk: Risk::Low,
    },
    InstalledApp {
        name: "Node.js",
        version: "20.9.0",
        risk: Risk::Medium,
    },
    InstalledApp {
        name: "Microsoft Office 365",
        version: "16.0.16924",
        risk: Risk::Low,
    },
    InstalledApp {
        name: "Spotify",
        version: "1.2.24",
        risk: Risk::Low,
    },
    InstalledApp {
        name: "Adobe Acrobat",
        version: "23.006.20380",
        risk: Risk::Medium,
    },
];

pub const LARGE_FILES: [LargeFile; 2] = [
    LargeFile {
        name: "backup_2025.iso",
        size: "4.2 GB",
        path: "~/Downloads",
    },
    LargeFile {
        name: "project_renders.zip",
        size: "2.8 GB",
        path: "~/Documents/Work",
    },
];

pub const DUPLICATE_FILES: usize = 0;
pub const FILE_SYSTEM_VERDICT: &str = "File system integrity is optimal.";
