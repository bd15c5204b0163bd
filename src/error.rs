error_chain! {
    foreign_links {
        Io(::std::io::Error);
        Walk(::walkdir::Error);
    }

    errors {
        DirectoryNotFound(directory: String) {
            description("directory does not exist")
            display("Directory {} does not exist", directory)
        }
        SameFile(source: String, destination: String) {
            description("source and destination are the same file")
            display("Refusing to copy {} onto itself ({})", source, destination)
        }
        InvalidText(file: String, reason: String) {
            description("file is not valid text")
            display("Unable to decode {} as text: {}", file, reason)
        }
    }
}
