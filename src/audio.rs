use crate::constants::ANALYSER_FFT_SIZE;
use crate::core::{bands_from_bytes, SpectrumSample};
use web_sys as web;

/// Wraps the analyser node and its scratch buffer. Unattached until playback
/// first starts; until then every sample is exactly zero, which is a normal
/// transient state rather than an error.
pub struct SpectrumSampler {
    analyser: Option<web::AnalyserNode>,
    bins: Vec<u8>,
}

impl SpectrumSampler {
    pub fn new() -> Self {
        Self {
            analyser: None,
            bins: Vec::new(),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.analyser.is_some()
    }

    pub fn attach(&mut self, analyser: web::AnalyserNode) {
        let bins = analyser.frequency_bin_count() as usize;
        self.bins.resize(bins, 0);
        self.analyser = Some(analyser);
    }

    /// Read the current frequency data and band it. Query at most once per
    /// render frame: the analyser refreshes on its own cadence, so repeated
    /// reads within a frame may be at least one frame old.
    pub fn sample(&mut self) -> SpectrumSample {
        let Some(analyser) = &self.analyser else {
            return SpectrumSample::ZERO;
        };
        let bins = analyser.frequency_bin_count() as usize;
        if self.bins.len() != bins {
            self.bins.resize(bins, 0);
        }
        analyser.get_byte_frequency_data(&mut self.bins);
        bands_from_bytes(&self.bins)
    }
}

/// Build the analysis chain for the audio element:
/// element source -> analyser -> destination. Called lazily the first time
/// the user starts playback, never reattached afterward.
pub fn build_analyser_chain(
    audio: &web::HtmlMediaElement,
) -> anyhow::Result<(web::AudioContext, web::AnalyserNode)> {
    let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("AudioContext: {:?}", e))?;
    let analyser =
        web::AnalyserNode::new(&ctx).map_err(|e| anyhow::anyhow!("AnalyserNode: {:?}", e))?;
    analyser.set_fft_size(ANALYSER_FFT_SIZE);
    let source = ctx
        .create_media_element_source(audio)
        .map_err(|e| anyhow::anyhow!("media element source: {:?}", e))?;
    source
        .connect_with_audio_node(&analyser)
        .map_err(|e| anyhow::anyhow!("source -> analyser: {:?}", e))?;
    analyser
        .connect_with_audio_node(&ctx.destination())
        .map_err(|e| anyhow::anyhow!("analyser -> destination: {:?}", e))?;
    Ok((ctx, analyser))
}
