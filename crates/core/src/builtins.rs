/// Built-in and SPL class names that resolve without any project file.
/// When a bare token matches one of these it is offered ahead of every
/// project-discovered namespace.
pub static BUILT_IN_CLASSES: &[&str] = &[
    "ArrayAccess",
    "ArrayIterator",
    "ArrayObject",
    "BadFunctionCallException",
    "BadMethodCallException",
    "CachingIterator",
    "CallbackFilterIterator",
    "Closure",
    "Countable",
    "DateInterval",
    "DatePeriod",
    "DateTime",
    "DateTimeImmutable",
    "DateTimeZone",
    "Directory",
    "DirectoryIterator",
    "DivisionByZeroError",
    "DomainException",
    "Error",
    "ErrorException",
    "Exception",
    "FilesystemIterator",
    "FilterIterator",
    "Generator",
    "GlobIterator",
    "InfiniteIterator",
    "InvalidArgumentException",
    "Iterator",
    "IteratorAggregate",
    "IteratorIterator",
    "JsonException",
    "JsonSerializable",
    "LengthException",
    "LimitIterator",
    "LogicException",
    "MultipleIterator",
    "NoRewindIterator",
    "OutOfBoundsException",
    "OutOfRangeException",
    "OverflowException",
    "ParentIterator",
    "ParseError",
    "RangeException",
    "RecursiveArrayIterator",
    "RecursiveDirectoryIterator",
    "RecursiveIteratorIterator",
    "ReflectionClass",
    "ReflectionFunction",
    "ReflectionMethod",
    "ReflectionProperty",
    "RegexIterator",
    "RuntimeException",
    "SeekableIterator",
    "Serializable",
    "SplDoublyLinkedList",
    "SplFileInfo",
    "SplFileObject",
    "SplFixedArray",
    "SplHeap",
    "SplMaxHeap",
    "SplMinHeap",
    "SplObjectStorage",
    "SplObserver",
    "SplPriorityQueue",
    "SplQueue",
    "SplStack",
    "SplSubject",
    "SplTempFileObject",
    "Stringable",
    "Throwable",
    "Traversable",
    "TypeError",
    "UnderflowException",
    "UnexpectedValueException",
    "UnhandledMatchError",
    "ValueError",
    "WeakMap",
    "WeakReference",
];

pub fn is_builtin(name: &str) -> bool {
    // The table is sorted; binary search keeps lookup cheap even though
    // it only runs once per query.
    BUILT_IN_CLASSES.binary_search(&name).is_ok()
}
