//! Unit file serialization.

use super::UnitOption;
use nodetune_shared::{NodetuneError, NodetuneResult};
use std::io::{self, Write};

/// Write options as unit file text.
///
/// Options are grouped under `[Section]` headers in the order each section is
/// first seen; inside a section, lines keep the order they were supplied in.
/// Sections are separated by one blank line and the output ends with the last
/// option's newline. An empty list writes nothing.
pub fn serialize<W: Write>(options: &[UnitOption], out: &mut W) -> io::Result<()> {
    let mut sections: Vec<(&str, Vec<&UnitOption>)> = Vec::new();
    for opt in options {
        match sections.iter_mut().find(|(name, _)| *name == opt.section) {
            Some((_, opts)) => opts.push(opt),
            None => sections.push((opt.section.as_str(), vec![opt])),
        }
    }

    for (idx, (section, opts)) in sections.iter().enumerate() {
        if idx > 0 {
            writeln!(out)?;
        }
        writeln!(out, "[{}]", section)?;
        for opt in opts {
            writeln!(out, "{}={}", opt.key, opt.value)?;
        }
    }

    Ok(())
}

/// Render options to a unit file string.
pub fn to_unit_string(options: &[UnitOption]) -> NodetuneResult<String> {
    let mut buf = Vec::new();
    serialize(options, &mut buf)
        .map_err(|e| NodetuneError::Serialization(format!("Failed to render unit: {}", e)))?;

    String::from_utf8(buf)
        .map_err(|e| NodetuneError::Serialization(format!("Unit is not valid UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opt(section: &str, key: &str, value: &str) -> UnitOption {
        UnitOption::new(section, key, value)
    }

    #[test]
    fn test_empty() {
        assert_eq!(to_unit_string(&[]).unwrap(), "");
    }

    #[test]
    fn test_sections_and_blank_lines() {
        let options = vec![
            opt("Unit", "Description", "demo"),
            opt("Service", "Type", "oneshot"),
            opt("Install", "WantedBy", "multi-user.target"),
        ];

        assert_eq!(
            to_unit_string(&options).unwrap(),
            "[Unit]\nDescription=demo\n\n[Service]\nType=oneshot\n\n[Install]\nWantedBy=multi-user.target\n"
        );
    }

    #[test]
    fn test_repeated_keys_kept_in_order() {
        let options = vec![
            opt("Unit", "Before", "kubelet.service"),
            opt("Unit", "Before", "reboot.service"),
        ];

        assert_eq!(
            to_unit_string(&options).unwrap(),
            "[Unit]\nBefore=kubelet.service\nBefore=reboot.service\n"
        );
    }

    #[test]
    fn test_interleaved_sections_grouped_by_first_seen() {
        let options = vec![
            opt("Service", "Type", "oneshot"),
            opt("Unit", "Description", "late"),
            opt("Service", "ExecStart", "/bin/true"),
        ];

        assert_eq!(
            to_unit_string(&options).unwrap(),
            "[Service]\nType=oneshot\nExecStart=/bin/true\n\n[Unit]\nDescription=late\n"
        );
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_stream_error_surfaces() {
        let options = vec![opt("Unit", "Description", "demo")];
        let err = serialize(&options, &mut FailingWriter).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
