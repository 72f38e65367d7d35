#[cfg(test)]
mod tidy;

use std::{error::Error, time::Instant};

use xshell::{cmd, Shell};

const SECTIONS: [&str; 3] = ["BUILD", "TEST", "EXAMPLES"];

fn main() -> Result<(), Box<dyn Error>> {
    // -p: tag and publish from master, -s: run only the named sections
    let flags = argschema::Args::from_env("p,s[]")?;
    let only = flags.get_array('s')?;
    if let Some(unknown) = only.iter().find(|it| !SECTIONS.contains(&it.as_str())) {
        return Err(format!("unknown section `{unknown}`, expected one of {SECTIONS:?}").into());
    }
    let enabled = |name: &str| only.is_empty() || only.iter().any(|it| it == name);

    let sh = Shell::new()?;

    cmd!(sh, "rustup toolchain install stable --no-self-update").run()?;
    let _e = sh.push_env("RUSTUP_TOOLCHAIN", "stable");
    cmd!(sh, "rustc --version").run()?;

    if enabled("BUILD") {
        let _s = section("BUILD");
        cmd!(sh, "cargo test --workspace --no-run").run()?;
    }

    if enabled("TEST") {
        let _s = section("TEST");
        cmd!(sh, "cargo test --workspace -- --nocapture").run()?;
    }

    if enabled("EXAMPLES") {
        let _s = section("EXAMPLES");
        cmd!(sh, "cargo run --example hello -- -n CI -e -r 2").run()?;
        let res = cmd!(sh, "cargo run --example hello -- -r many").ignore_status().output()?;
        if res.status.success() {
            return Err("`hello -r many` should have been rejected".into());
        }
    }

    if flags.get_boolean('p')? {
        let _s = section("PUBLISH");
        publish(&sh)?;
    }

    Ok(())
}

fn publish(sh: &Shell) -> xshell::Result<()> {
    let version = cmd!(sh, "cargo pkgid -p argschema").read()?;
    let version = version.rsplit_once('#').map_or(version.as_str(), |(_, it)| it).to_string();
    let tag = format!("v{version}");

    let current_branch = cmd!(sh, "git branch --show-current").read()?;
    let tag_exists =
        cmd!(sh, "git tag --list").read()?.split_ascii_whitespace().any(|it| it == tag);

    if current_branch == "master" && !tag_exists {
        cmd!(sh, "git tag {tag}").run()?;
        cmd!(sh, "cargo publish -p argschema").run()?;
        cmd!(sh, "git push --tags").run()?;
    }
    Ok(())
}

fn section(name: &'static str) -> impl Drop {
    println!("::group::{name}");
    let start = Instant::now();
    defer(move || {
        let elapsed = start.elapsed();
        eprintln!("{name}: {elapsed:.2?}");
        println!("::endgroup::");
    })
}

fn defer<F: FnOnce()>(f: F) -> impl Drop {
    struct D<F: FnOnce()>(Option<F>);
    impl<F: FnOnce()> Drop for D<F> {
        fn drop(&mut self) {
            if let Some(f) = self.0.take() {
                f()
            }
        }
    }
    D(Some(f))
}
