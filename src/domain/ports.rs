use crate::utils::error::Result;

pub trait Storage {
    fn exists(&self, path: &str) -> bool;
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    /// Replace the whole file at `path` with `data`.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn base_dir(&self) -> &str;
    fn data_file(&self) -> &str;
    fn report_file(&self) -> &str;
}
