//! External command execution.
//!
//! Backends never touch `std::process` directly. They describe what to run as
//! an [`Invocation`] and hand it to a [`CommandRunner`], which lets unit tests
//! swap in a recording stub.

use std::fmt;
use std::io;
use std::process::{Command, Stdio};

use duct::cmd;

use crate::common::shell::command_line;
use crate::ui::prelude::*;

/// A single external program or shell execution request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub verbose: bool,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            verbose: false,
        }
    }

    /// Run `line` through `sh -c`, so pipes and redirects are interpreted.
    pub fn shell(line: impl Into<String>) -> Self {
        Self::new("sh").arg("-c").arg(line)
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn echo(&self) {
        if self.verbose {
            emit(Level::Debug, "command.exec", &self.to_string(), None);
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&command_line(&self.program, &self.args))
    }
}

/// Executes [`Invocation`]s.
pub trait CommandRunner {
    /// Block until the command exits. Fails if it could not be spawned or
    /// exited non-zero. Combined output is discarded either way.
    fn run(&self, invocation: &Invocation) -> io::Result<()>;

    /// Start the command without waiting and return its process id.
    ///
    /// The child is not waited on, signalled or reaped.
    fn spawn(&self, invocation: &Invocation) -> io::Result<u32>;

    /// Block and return combined stdout and stderr.
    ///
    /// Returns an empty string on any failure. Only use this where an empty
    /// result is already a handled case.
    fn capture(&self, invocation: &Invocation) -> String;

    fn run_shell(&self, line: &str, verbose: bool) -> io::Result<()> {
        self.run(&Invocation::shell(line).verbose(verbose))
    }

    fn capture_shell(&self, line: &str, verbose: bool) -> String {
        self.capture(&Invocation::shell(line).verbose(verbose))
    }
}

/// Runs commands on the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<()> {
        invocation.echo();
        cmd(invocation.program.as_str(), &invocation.args)
            .stderr_to_stdout()
            .stdout_capture()
            .run()
            .map(|_| ())
    }

    fn spawn(&self, invocation: &Invocation) -> io::Result<u32> {
        invocation.echo();
        let child = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(child.id())
    }

    fn capture(&self, invocation: &Invocation) -> String {
        invocation.echo();
        match cmd(invocation.program.as_str(), &invocation.args)
            .stderr_to_stdout()
            .stdout_capture()
            .run()
        {
            Ok(output) => String::from_utf8_lossy(&output.stdout).into_owned(),
            Err(_) => String::new(),
        }
    }
}
