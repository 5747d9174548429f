use crate::leaf_image::LeafImage;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum DeviceInputEvent {
    ImageChosen(PathBuf),
    ImageDropped(LeafImage),
    DiagnosePressed,
    ResetPressed,
    QuitPressed,
}

pub trait DeviceInput: Send + Sync {
    fn events(&self) -> std::sync::mpsc::Receiver<DeviceInputEvent>;
}
