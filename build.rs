fn main() {
    #[cfg(target_os = "windows")]
    {
        let mut res = winres::WindowsResource::new();
        res.set("ProductName", "World Dash");
        res.set("FileDescription", "Interactive world-statistics dashboard");
        res.compile().expect("Failed to compile Windows resources");
    }
}
