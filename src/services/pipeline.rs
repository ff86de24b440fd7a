//! Image file to cartridge, end to end.

use pico_dither::catalog;
use pico_dither::palette::{codes_to_indices, palette_from_file};
use pico_dither::reduce::TARGET_COLORS;
use pico_dither::{DitherError, DitherOptions, IndexedImage, Palette, PicoConverter};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::error::ConvertError;
use crate::export::{encode_cartridge, encode_preview};
use crate::models::{ConvertConfig, MAX_IMAGE_SIZE};
use crate::services::image_loader::load_image;

/// Where the candidate palette comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PaletteChoice {
    /// All 32 catalog colors
    #[default]
    Full,
    /// The 16 primary colors only
    Primaries,
    /// A palette file of console codes
    File(PathBuf),
    /// Console codes given inline (from a config file)
    Codes(Vec<u8>),
}

/// Everything one conversion needs.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub input: PathBuf,
    /// Cartridge to write
    pub output: Option<PathBuf>,
    /// Preview PNG to write
    pub export: Option<PathBuf>,
    pub palette: PaletteChoice,
    /// Console codes removed from the candidates
    pub ban: Vec<u8>,
    pub options: DitherOptions,
    pub brighten: f32,
    pub contrast: f32,
    pub slower_recommend: bool,
    pub max_size: u32,
    /// Overwrite an existing cartridge
    pub force: bool,
}

impl ConvertRequest {
    /// A request seeded from config-file defaults.
    pub fn from_config(input: PathBuf, config: &ConvertConfig) -> Self {
        let palette = match &config.palette {
            Some(codes) => PaletteChoice::Codes(codes.clone()),
            None => PaletteChoice::Full,
        };
        let options = DitherOptions::new()
            .mode(config.dither_mode.into())
            .strength(percent_to_strength(config.dither))
            .matrix_size(config.ordered_matrix_size);

        Self {
            input,
            output: None,
            export: None,
            palette,
            ban: config.ban.clone(),
            options,
            brighten: config.brighten,
            contrast: config.contrast,
            slower_recommend: config.slower_recommend,
            max_size: config.max_size,
            force: false,
        }
    }
}

/// Summary of a finished conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertReport {
    pub width: usize,
    pub height: usize,
    /// Catalog index shown in each slot
    pub slots: Vec<u8>,
    pub cartridge: Option<PathBuf>,
    pub preview: Option<PathBuf>,
}

/// Map a percentage onto a dithering strength in 0.0..=1.0.
pub fn percent_to_strength(percent: f32) -> f32 {
    if percent.is_nan() {
        return 0.0;
    }
    (percent / 100.0).clamp(0.0, 1.0)
}

/// Build the candidate palette for a request.
pub fn resolve_palette(choice: &PaletteChoice, ban: &[u8]) -> Result<Palette, ConvertError> {
    let palette = match choice {
        PaletteChoice::Full => Palette::full(),
        PaletteChoice::Primaries => Palette::primaries(),
        PaletteChoice::File(path) => {
            let text = std::fs::read_to_string(path)?;
            palette_from_file(&text).map_err(|source| ConvertError::PaletteFile {
                path: path.clone(),
                source,
            })?
        }
        PaletteChoice::Codes(codes) => {
            Palette::new(&codes_to_indices(codes)).map_err(DitherError::from)?
        }
    };

    let banned: Vec<u8> = ban.iter().map(|&code| catalog::code_to_index(code)).collect();
    let palette = palette.without(&banned);
    tracing::info!(
        source = ?choice,
        banned = ?banned,
        colors = palette.len(),
        "Candidate palette"
    );
    Ok(palette)
}

/// Runs conversions described by [`ConvertRequest`]s.
#[derive(Debug, Default)]
pub struct ConversionPipeline;

impl ConversionPipeline {
    pub fn new() -> Self {
        Self
    }

    /// Convert `request.input` and write the requested outputs.
    ///
    /// Nothing is written unless every step succeeds. An existing cartridge
    /// is refused before any work starts unless `force` is set.
    pub fn run(&self, request: &ConvertRequest) -> Result<ConvertReport, ConvertError> {
        if request.output.is_none() && request.export.is_none() {
            return Err(ConvertError::Precondition(
                "nothing to write: give an output cartridge or --export".to_string(),
            ));
        }
        if let Some(output) = &request.output {
            if output.exists() && !request.force {
                return Err(ConvertError::OutputExists(output.clone()));
            }
        }

        let image = self.convert(request)?;

        // Encode and stage everything before any file is replaced
        let mut staged = Vec::with_capacity(2);
        if let Some(path) = &request.output {
            let text = encode_cartridge(&image)?;
            staged.push((stage(path, text.as_bytes())?, path));
        }
        if let Some(path) = &request.export {
            let png = encode_preview(&image)?;
            staged.push((stage(path, &png)?, path));
        }
        commit(staged)?;

        if let Some(path) = &request.output {
            tracing::info!(path = %path.display(), "Wrote cartridge");
        }
        if let Some(path) = &request.export {
            tracing::info!(path = %path.display(), "Wrote preview");
        }

        Ok(ConvertReport {
            width: image.width(),
            height: image.height(),
            slots: image.palette().entries().to_vec(),
            cartridge: request.output.clone(),
            preview: request.export.clone(),
        })
    }

    /// Load, adjust, reduce and dither, without writing anything.
    pub fn convert(&self, request: &ConvertRequest) -> Result<IndexedImage, ConvertError> {
        let candidates = resolve_palette(&request.palette, &request.ban)?;
        let loaded = load_image(&request.input, request.max_size.clamp(1, MAX_IMAGE_SIZE))?;

        let converter = PicoConverter::new(candidates)
            .options(request.options.clone())
            .brighten(request.brighten)
            .contrast(request.contrast)
            .slower_recommend(request.slower_recommend);

        if converter.candidates().len() > TARGET_COLORS {
            tracing::info!("Generating recommended palette");
        }
        let image = converter.convert(&loaded.pixels, loaded.width, loaded.height)?;
        tracing::info!(
            width = image.width(),
            height = image.height(),
            slots = ?image.palette().entries(),
            mode = ?request.options.effective_mode(),
            "Converted image"
        );
        Ok(image)
    }
}

/// Write `bytes` to a uniquely named temp file next to `path`.
fn stage(path: &Path, bytes: &[u8]) -> Result<NamedTempFile, ConvertError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    Ok(tmp)
}

/// Move staged files over their targets.
///
/// If a rename fails, targets already moved into place by this call are
/// removed again and the remaining temp files are dropped.
fn commit(staged: Vec<(NamedTempFile, &PathBuf)>) -> Result<(), ConvertError> {
    let mut placed: Vec<&PathBuf> = Vec::with_capacity(staged.len());
    for (tmp, path) in staged {
        if let Err(e) = tmp.persist(path) {
            for done in placed {
                let _ = std::fs::remove_file(done);
            }
            return Err(e.error.into());
        }
        placed.push(path);
    }
    Ok(())
}
