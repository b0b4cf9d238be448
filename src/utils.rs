use std::str::FromStr;

/// Parse `"a,b,c"` into a triplet, e.g. for volume shapes given on the command line
#[allow(clippy::many_single_char_names)]
pub fn parse_triplet<T>(s: &str) -> Result<(T,T,T), String>
where
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    let v = s.split(',').map(str::trim).collect::<Vec<_>>();
    if v.len() != 3 {
        return Err(format!("expected 3 comma-separated values, found {} in '{s}'", v.len()));
    }
    let parse = |x: &str| x.parse::<T>().map_err(|e| format!("could not parse '{x}': {e}"));
    let x = parse(v[0])?;
    let y = parse(v[1])?;
    let z = parse(v[2])?;
    Ok((x, y, z))
}

/// Group numeric digits to facilitate reading long numbers
pub fn group_digits<F: std::fmt::Display>(n: F) -> String {
    use numsep::{separate, Locale};
    separate(n, Locale::English)
}


pub mod timing {

    use super::group_digits;
    use std::time::Instant;
    use std::io::Write;

    pub struct Progress {
        previous: Instant,
    }

    impl Progress {

        #[allow(clippy::new_without_default)]
        pub fn new() -> Self { Self { previous: Instant::now() } }

        /// Print message, append ellipsis, flush stdout, stay on same line, start timer.
        pub fn start(&mut self, message: &str) {
            print!("{message} ... ");
            // Nothing useful to do if stdout is gone
            let _ = std::io::stdout().flush();
            self.start_timer();
        }

        // Print time elapsed since last start or done
        pub fn done(&mut self) {
            println!("{} ms", group_digits(self.previous.elapsed().as_millis()));
            self.start_timer();
        }

        fn start_timer(&mut self) { self.previous = Instant::now() }
    }
}
