//! Per-IP prefix reporting

use crate::bgp::{PrefixLookupService, PrefixRecord};
use crate::config::DisplayMode;
use std::io::{self, Write};
use std::net::IpAddr;

/// Render one record in the given display mode
pub fn format_record(record: &PrefixRecord, mode: DisplayMode) -> String {
    match mode {
        DisplayMode::AsnOnly => record.asn.to_string(),
        DisplayMode::PrefixOnly => record.prefix.clone(),
        DisplayMode::Full => format!("prefix: {}, ASN: {}", record.prefix, record.asn),
    }
}

/// Look up every IP and write its records to `out`.
///
/// Each IP gets an `[+] <ip>:` header followed by one line per record.
/// A failed lookup writes the error in place of the records and the loop
/// moves on to the next IP. Only failures writing to `out` are returned.
pub async fn report<L, W>(
    lookup: &L,
    ips: &[IpAddr],
    mode: DisplayMode,
    out: &mut W,
) -> io::Result<()>
where
    L: PrefixLookupService + ?Sized,
    W: Write,
{
    for ip in ips {
        writeln!(out, "[+] {ip}:")?;

        let records = match lookup.lookup(*ip).await {
            Ok(records) => records,
            Err(e) => {
                tracing::debug!(%ip, error = ?e, "prefix lookup failed");
                writeln!(out, "{e}")?;
                continue;
            }
        };

        for record in &records {
            writeln!(out, "{}", format_record(record, mode))?;
        }
    }
    Ok(())
}
