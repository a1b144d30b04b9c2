use vergen_gitcl::{CargoBuilder, Emitter, GitclBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let cargo = CargoBuilder::default().target_triple(true).build()?;
	let gitcl = GitclBuilder::default().sha(true).build()?;
	let mut emitter = Emitter::default();

	emitter.add_instructions(&cargo)?;

	// Builds outside a git checkout have no SHA to embed.
	if emitter.add_instructions(&gitcl).is_err() {
		println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
	}

	emitter.emit()?;

	Ok(())
}
