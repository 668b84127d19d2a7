use crate::{
    analyzer::AnalyzerConfig, cloud::CloudRenderer, yt::VideoSource, ColorScheme, Summarizer,
    VideoAnalyzer,
};

pub struct VideoAnalyzerBuilder<V = (), S = (), R = ()> {
    source: V,
    summarizer: S,
    renderer: R,
    config: AnalyzerConfig,
}

impl VideoAnalyzerBuilder {
    pub fn new() -> Self {
        Self {
            source: (),
            summarizer: (),
            renderer: (),
            config: AnalyzerConfig::default(),
        }
    }
}

impl Default for VideoAnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, S, R> VideoAnalyzerBuilder<V, S, R> {
    pub fn source<V2: VideoSource + Send + Sync + 'static>(
        self,
        source: V2,
    ) -> VideoAnalyzerBuilder<V2, S, R> {
        VideoAnalyzerBuilder {
            source,
            summarizer: self.summarizer,
            renderer: self.renderer,
            config: self.config,
        }
    }

    pub fn summarizer<S2: Summarizer + Send + Sync + 'static>(
        self,
        summarizer: S2,
    ) -> VideoAnalyzerBuilder<V, S2, R> {
        VideoAnalyzerBuilder {
            source: self.source,
            summarizer,
            renderer: self.renderer,
            config: self.config,
        }
    }

    pub fn renderer<R2: CloudRenderer + Send + Sync + 'static>(
        self,
        renderer: R2,
    ) -> VideoAnalyzerBuilder<V, S, R2> {
        VideoAnalyzerBuilder {
            source: self.source,
            summarizer: self.summarizer,
            renderer,
            config: self.config,
        }
    }

    pub fn config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn languages<I, L>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.config.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn speakers<I, N>(mut self, speakers: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.config.speakers = speakers.into_iter().map(Into::into).collect();
        self
    }

    pub fn top_words(mut self, top_words: usize) -> Self {
        self.config.top_words = top_words;
        self
    }

    pub fn color_scheme(mut self, color_scheme: ColorScheme) -> Self {
        self.config.color_scheme = color_scheme;
        self
    }
}

impl<V, S, R> VideoAnalyzerBuilder<V, S, R>
where
    V: VideoSource + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    R: CloudRenderer + Send + Sync + 'static,
{
    pub fn build(self) -> VideoAnalyzer<V, S, R> {
        VideoAnalyzer::new(self.source, self.summarizer, self.renderer, self.config)
    }
}
