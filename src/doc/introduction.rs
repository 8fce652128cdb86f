/*!
# Introductory Tutorial for TinyBASIC

Begin by opening a terminal and running the executable. If you get the
following, you have achieved success and are ready for this tutorial.
Type QUIT or CTRL-D to exit.
<pre><code>TinyBASIC - commands: LOAD SAVE LIST RUN NEW QUIT
BASIC> █
</code></pre>

Stop a running program with CTRL-C.

Everything you type is either a command or a program line.
A program line starts with a line number. It is stored, not run.

<pre><code>BASIC> 10 print "Hello World"
</code></pre>

Nothing happens. Let's look at the program and then run it.

<pre><code>BASIC> LIST
10 print "Hello World"
BASIC> RUN
Hello World
</code></pre>

Lines are kept in line number order no matter what order you type them.
Typing a line number that already exists replaces that line.
Typing only a line number deletes the line.

<pre><code>BASIC> 5 PRINT "First"
BASIC> 10
BASIC> LIST
5 PRINT "First"
</code></pre>

Here's a program that counts.

<pre><code>BASIC> NEW
BASIC> 10 FOR I=1 TO 3
BASIC> 20 PRINT I
BASIC> 30 NEXT I
BASIC> 40 END
BASIC> RUN
1
2
3
</code></pre>

Save your work with `SAVE count.bas` and get it back later with
`LOAD count.bas`. A program file can also be run directly from the shell
with `basic count.bas`.
*/
