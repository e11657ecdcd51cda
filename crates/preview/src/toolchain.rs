use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tracing::{debug, warn};

use crate::error::{CompileError, CompileStage, truncate_diagnostic};

/// Turns a LaTeX snippet into a raster image.
pub trait Compile: Send + Sync + 'static {
	fn compile(&self, snippet: &str) -> Result<PathBuf, CompileError>;
}

const BASE_NAME: &str = "preview";

/// Compiles snippets with `latexmk` (LuaLaTeX) and rasterizes the first page
/// with `pdftoppm`.
///
/// All artifacts are written to `workdir`, which the caller owns and removes.
#[derive(Debug, Clone)]
pub struct LatexToolchain {
	workdir: PathBuf,
	latex: String,
	rasterizer: String,
}

impl LatexToolchain {
	pub fn new(workdir: impl Into<PathBuf>) -> Self {
		Self::with_programs(workdir, "latexmk", "pdftoppm")
	}

	/// Uses alternative executable names for the two pipeline steps.
	pub fn with_programs(workdir: impl Into<PathBuf>, latex: impl Into<String>, rasterizer: impl Into<String>) -> Self {
		Self {
			workdir: workdir.into(),
			latex: latex.into(),
			rasterizer: rasterizer.into(),
		}
	}

	pub fn tex_path(&self) -> PathBuf {
		self.workdir.join(format!("{BASE_NAME}.tex"))
	}

	pub fn pdf_path(&self) -> PathBuf {
		self.workdir.join(format!("{BASE_NAME}.pdf"))
	}

	/// Output prefix handed to `pdftoppm`; it appends `.png` itself.
	fn image_prefix(&self) -> PathBuf {
		self.workdir.join(format!("{BASE_NAME}_image"))
	}

	pub fn image_path(&self) -> PathBuf {
		self.image_prefix().with_extension("png")
	}

	/// Names of required executables that are not on `PATH`.
	pub fn missing_programs(&self) -> Vec<&str> {
		[self.latex.as_str(), self.rasterizer.as_str()]
			.into_iter()
			.filter(|program| which::which(program).is_err())
			.collect()
	}

	/// Writes the standalone document wrapping `snippet`.
	pub fn write_tex(&self, snippet: &str) -> Result<PathBuf, CompileError> {
		let path = self.tex_path();
		fs::write(&path, document(snippet)).map_err(|err| {
			CompileError::new(CompileStage::ToTex, format!("Could not write {}: {err}", path.display()))
		})?;
		Ok(path)
	}

	fn run(&self, stage: CompileStage, command: &mut Command) -> Result<Output, CompileError> {
		debug!(?stage, ?command, "preview.toolchain.run");
		let output = command
			.current_dir(&self.workdir)
			.output()
			.map_err(|err| CompileError::new(stage, format!("Could not run {:?}: {err}", command.get_program())))?;
		if !output.status.success() {
			warn!(?stage, status = ?output.status, "preview.toolchain.failed");
		}
		Ok(output)
	}
}

impl Compile for LatexToolchain {
	fn compile(&self, snippet: &str) -> Result<PathBuf, CompileError> {
		let missing = self.missing_programs();
		if !missing.is_empty() {
			return Err(CompileError::new(
				CompileStage::Unavailable,
				format!("Missing commands for preview: {}.", missing.join(", ")),
			));
		}

		self.write_tex(snippet)?;

		let latex = self.run(
			CompileStage::ToPdf,
			Command::new(&self.latex).args([
				"-pdflua",
				"-interaction=nonstopmode",
				"-halt-on-error",
				"-quiet",
			])
			.arg(format!("{BASE_NAME}.tex")),
		)?;
		if !latex.status.success() {
			return Err(CompileError::new(
				CompileStage::ToPdf,
				format!(
					"LaTeX compilation failed (see log in temp directory). stderr: {}",
					truncate_diagnostic(&String::from_utf8_lossy(&latex.stderr))
				),
			));
		}
		let pdf = self.pdf_path();
		if !pdf.exists() {
			return Err(CompileError::new(CompileStage::ToPdf, "Expected preview PDF was not generated."));
		}

		let convert = self.run(
			CompileStage::ToImage,
			Command::new(&self.rasterizer)
				.args(["-png", "-singlefile", "-f", "1", "-l", "1"])
				.arg(&pdf)
				.arg(self.image_prefix()),
		)?;
		if !convert.status.success() {
			return Err(CompileError::new(
				CompileStage::ToImage,
				format!(
					"Failed converting PDF to PNG. stderr: {}",
					truncate_diagnostic(&String::from_utf8_lossy(&convert.stderr))
				),
			));
		}
		let image = self.image_path();
		if !image.exists() {
			return Err(CompileError::new(CompileStage::ToImage, "Preview image missing after conversion."));
		}
		Ok(image)
	}
}

/// Standalone LaTeX document for `snippet`: a small landscape page with the
/// snippet scaled up in display math.
pub fn document(snippet: &str) -> String {
	format!(
		r"\documentclass[14pt]{{article}}
\usepackage[paperwidth=4in,paperheight=1.5in,margin=0.1in]{{geometry}}
\usepackage{{simpler-wick}}
\usepackage{{amsmath}}
\usepackage{{amssymb}}
\usepackage{{braket}}
\usepackage{{graphicx}}
\begin{{document}}
\thispagestyle{{empty}}
\[
\scalebox{{1.9}}{{$
{snippet}
$}}
\]
\end{{document}}
"
	)
}
