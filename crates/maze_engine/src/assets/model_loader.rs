//! Packed-vertex model loader
//!
//! A model file is whitespace-separated ASCII: an integer float count `n`
//! followed by `n` floats, eight per vertex (position, normal, texcoord).

use super::{read_resource, LoadError};
use crate::scene::{ModelId, Scene, FLOATS_PER_VERTEX};
use std::path::Path;

/// Loads model files into a scene's packed model store
pub struct ModelLoader;

impl ModelLoader {
    /// Load one model file and append it to the scene.
    ///
    /// The returned id is the model's position in load order; the caller must
    /// load models in the same order every run for ids to stay stable.
    pub fn load_model<P: AsRef<Path>>(scene: &mut Scene, path: P) -> Result<ModelId, LoadError> {
        let path = path.as_ref();
        let contents = read_resource(path)?;
        Self::load_model_str(scene, path, &contents)
    }

    /// Load several model files in order.
    ///
    /// Every file is read and parsed before the first one is appended, so a
    /// failure anywhere in the list leaves the store untouched.
    pub fn load_models<I, P>(scene: &mut Scene, paths: I) -> Result<Vec<ModelId>, LoadError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let parsed = paths
            .into_iter()
            .map(|path| -> Result<_, LoadError> {
                let path = path.as_ref();
                let floats = Self::parse(path, &read_resource(path)?)?;
                Ok((path.to_path_buf(), floats))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(parsed
            .iter()
            .map(|(path, floats)| Self::append(scene, path, floats))
            .collect())
    }

    /// Parse model text already in memory and append it to the scene.
    ///
    /// `source` only labels error messages and log lines.
    pub fn load_model_str<P: AsRef<Path>>(
        scene: &mut Scene,
        source: P,
        contents: &str,
    ) -> Result<ModelId, LoadError> {
        let source = source.as_ref();
        let floats = Self::parse(source, contents)?;
        Ok(Self::append(scene, source, &floats))
    }

    fn append(scene: &mut Scene, source: &Path, floats: &[f32]) -> ModelId {
        let id = scene.models.push_model(floats);

        log::debug!(
            "Loaded model {} as #{}: {} vertices starting at {}",
            source.display(),
            id.index(),
            floats.len() / FLOATS_PER_VERTEX,
            scene.models.start_vertices()[id.index()]
        );

        id
    }

    /// Parse model text into its packed floats
    pub fn parse<P: AsRef<Path>>(source: P, contents: &str) -> Result<Vec<f32>, LoadError> {
        let source = source.as_ref();
        let malformed = |reason: String| LoadError::MalformedModelFile {
            path: source.to_path_buf(),
            reason,
        };

        let mut tokens = contents.split_whitespace();

        let count_token = tokens
            .next()
            .ok_or_else(|| malformed("missing vertex-float count".to_string()))?;
        let count: usize = count_token
            .parse()
            .map_err(|_| malformed(format!("invalid vertex-float count `{count_token}`")))?;

        if count % FLOATS_PER_VERTEX != 0 {
            return Err(malformed(format!(
                "vertex-float count {count} is not a multiple of {FLOATS_PER_VERTEX}"
            )));
        }

        // The count comes from the file, so don't trust it for preallocation
        let mut floats = Vec::with_capacity(count.min(contents.len()));
        for index in 0..count {
            let token = tokens
                .next()
                .ok_or_else(|| malformed(format!("declared {count} floats but found {index}")))?;
            let value: f32 = token
                .parse()
                .map_err(|_| malformed(format!("invalid float `{token}` at position {index}")))?;
            floats.push(value);
        }

        Ok(floats)
    }
}
