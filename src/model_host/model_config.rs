use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TensorLayout {
    /// `[1, height, width, 3]`, the Keras export default.
    #[default]
    Nhwc,
    /// `[1, 3, height, width]`
    Nchw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelScale {
    /// 0..=255, for graphs with a built-in rescaling layer.
    #[default]
    Raw,
    /// 0..=1
    Unit,
}

impl PixelScale {
    pub fn apply(&self, channel: u8) -> f32 {
        match self {
            PixelScale::Raw => channel as f32,
            PixelScale::Unit => channel as f32 / 255.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub model_path: PathBuf,
    /// (height, width)
    pub input_shape: (u32, u32),
    pub layout: TensorLayout,
    pub pixel_scale: PixelScale,
}

impl ModelConfig {
    pub fn input_dims(&self) -> [usize; 4] {
        let (height, width) = (self.input_shape.0 as usize, self.input_shape.1 as usize);
        match self.layout {
            TensorLayout::Nhwc => [1, height, width, 3],
            TensorLayout::Nchw => [1, 3, height, width],
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("web_model/plant_doctor.onnx"),
            input_shape: (224, 224),
            layout: TensorLayout::Nhwc,
            pixel_scale: PixelScale::Raw,
        }
    }
}
