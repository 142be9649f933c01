use crate::areas::console::Console;
use crate::areas::git::GitCli;
use crate::areas::ignore::IgnoreFile;
use crate::areas::lfs::Lfs;
use std::cell::{RefCell, RefMut};
use std::path::Path;

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    git: GitCli,
    lfs: Lfs,
    ignore: IgnoreFile,
    console: Console,
}

impl Repository {
    pub fn new(
        path: &str,
        writer: Box<dyn std::io::Write>,
        console: Console,
    ) -> anyhow::Result<Self> {
        let path = Path::new(path);
        if !path.exists() {
            std::fs::create_dir_all(path)?;
        }
        let path = path.canonicalize()?;

        let git = GitCli::new(path.clone().into_boxed_path());
        let lfs = Lfs::new(path.clone().into_boxed_path());
        let ignore = IgnoreFile::new(path.clone().into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            git,
            lfs,
            ignore,
            console,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&self) -> RefMut<Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn git(&self) -> &GitCli {
        &self.git
    }

    pub fn lfs(&self) -> &Lfs {
        &self.lfs
    }

    pub fn ignore(&self) -> &IgnoreFile {
        &self.ignore
    }

    pub fn console(&self) -> &Console {
        &self.console
    }
}
